//! Selection operators

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Uniform};

use crate::error::{EvoResult, EvolutionError};
use crate::genetics::chromosome::Chromosome;
use crate::population::population::Population;
use crate::ranking::{Optimize, Ranker};

/// Fitness-proportional (roulette wheel) selection.
///
/// Builds a cumulative weight array and maps uniform draws to indices by
/// binary search. Weights are shifted by `min(fitness) - epsilon` whenever
/// the minimum is non-positive, so negative and all-equal fitness
/// populations stay well-defined (all-equal collapses to a uniform draw,
/// never a division by zero). Under a minimizing ranker, fitnesses are
/// negated before weighting.
#[derive(Clone, Debug)]
pub struct RouletteWheelSelector {
    /// Strictly positive floor added when shifting weights
    pub epsilon: f64,
}

impl RouletteWheelSelector {
    /// Create a selector with the default weight floor
    pub fn new() -> Self {
        Self { epsilon: 1e-9 }
    }
}

impl Default for RouletteWheelSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RouletteWheelSelector {
    /// Cumulative weights for the population under the given ranker
    fn cumulative_weights<C: Chromosome>(
        &self,
        population: &Population<C>,
        ranker: &Ranker,
    ) -> EvoResult<Vec<f64>> {
        let mut fitnesses = Vec::with_capacity(population.len());
        for individual in population.iter() {
            let f = individual.fitness.ok_or(EvolutionError::InvalidOperation(
                "roulette-wheel selection over unevaluated individuals",
            ))?;
            let f = match ranker.optimize() {
                Optimize::Maximize => f,
                Optimize::Minimize => -f,
            };
            fitnesses.push(if f.is_finite() { f } else { f64::MIN });
        }

        let min = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let shift = if min <= 0.0 { -min + self.epsilon } else { 0.0 };

        let mut cumulative = Vec::with_capacity(fitnesses.len());
        let mut total = 0.0;
        for f in fitnesses {
            total += f + shift;
            cumulative.push(total);
        }
        Ok(cumulative)
    }
}

impl<C: Chromosome> crate::operators::traits::Selector<C> for RouletteWheelSelector {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        ranker: &Ranker,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        if count == 0 {
            return Ok(Population::new());
        }
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let cumulative = self.cumulative_weights(population, ranker)?;
        let total = cumulative[cumulative.len() - 1];
        let draw = Uniform::new(0.0, total);

        let mut selected = Population::with_capacity(count);
        for _ in 0..count {
            let r = draw.sample(rng);
            // first cumulative bin exceeding the draw
            let index = cumulative
                .partition_point(|&c| c <= r)
                .min(population.len() - 1);
            selected.push(population[index].clone());
        }
        Ok(selected)
    }
}

/// Tournament selection.
///
/// Each pick draws `size` individuals uniformly at random (with replacement)
/// and keeps the best under the ranker; ties go to the first drawn.
#[derive(Clone, Debug)]
pub struct TournamentSelector {
    /// Number of individuals competing per pick
    pub size: usize,
}

impl TournamentSelector {
    /// Create a tournament of the given size
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Tournament size must be at least 1");
        Self { size }
    }
}

impl Default for TournamentSelector {
    fn default() -> Self {
        Self::new(3)
    }
}

impl<C: Chromosome> crate::operators::traits::Selector<C> for TournamentSelector {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        ranker: &Ranker,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        if count == 0 {
            return Ok(Population::new());
        }
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let mut selected = Population::with_capacity(count);
        for _ in 0..count {
            let mut best = rng.gen_range(0..population.len());
            for _ in 1..self.size {
                let challenger = rng.gen_range(0..population.len());
                // strict comparison keeps the earlier draw on ties
                if ranker
                    .compare_individuals(&population[challenger], &population[best])
                    .is_gt()
                {
                    best = challenger;
                }
            }
            selected.push(population[best].clone());
        }
        Ok(selected)
    }
}

/// Uniform selection, ignoring fitness entirely
#[derive(Clone, Debug, Default)]
pub struct RandomSelector;

impl RandomSelector {
    /// Create a uniform selector
    pub fn new() -> Self {
        Self
    }
}

impl<C: Chromosome> crate::operators::traits::Selector<C> for RandomSelector {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        _ranker: &Ranker,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        if count == 0 {
            return Ok(Population::new());
        }
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        Ok((0..count)
            .map(|_| population[rng.gen_range(0..population.len())].clone())
            .collect())
    }
}
