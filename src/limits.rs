//! Termination criteria
//!
//! A limit observes the end-of-generation state and answers whether the run
//! may continue. Multiple limits combine with AND: evolution keeps going only
//! while every installed limit still holds.

use crate::engine::state::EvolutionState;
use crate::error::{EvoResult, EvolutionError};
use crate::genetics::chromosome::Chromosome;

/// Termination criterion with continuation sense.
///
/// `holds` returns true while evolution may continue. Limits never mutate the
/// state they observe.
pub trait Limit<C: Chromosome>: Send + Sync {
    /// True while this criterion permits another generation
    fn holds(&self, state: &EvolutionState<C>) -> bool;
}

/// Stop after a fixed number of generations.
///
/// Holds while `generation <= max`; the generation that observes the
/// boundary still completes before the run stops.
#[derive(Clone, Copy, Debug)]
pub struct MaxGenerations {
    max: usize,
}

impl MaxGenerations {
    /// A limit of `max` generations; zero is rejected
    pub fn new(max: usize) -> EvoResult<Self> {
        if max == 0 {
            return Err(EvolutionError::InvalidOperation(
                "generation limit must be at least 1",
            ));
        }
        Ok(Self { max })
    }
}

impl<C: Chromosome> Limit<C> for MaxGenerations {
    fn holds(&self, state: &EvolutionState<C>) -> bool {
        state.generation <= self.max
    }
}

/// Stop once the best fitness has not improved for `steady` consecutive
/// generations.
#[derive(Clone, Copy, Debug)]
pub struct SteadyGenerations {
    steady: usize,
}

impl SteadyGenerations {
    /// A limit of `steady` unimproved generations; zero is rejected
    pub fn new(steady: usize) -> EvoResult<Self> {
        if steady == 0 {
            return Err(EvolutionError::InvalidOperation(
                "steady-generation limit must be at least 1",
            ));
        }
        Ok(Self { steady })
    }
}

impl<C: Chromosome> Limit<C> for SteadyGenerations {
    fn holds(&self, state: &EvolutionState<C>) -> bool {
        state.steady < self.steady
    }
}

/// Stop once the best fitness reaches a target under the active ranker.
///
/// Under maximize the target is a floor to reach, under minimize a ceiling.
/// While no individual has been evaluated the limit holds.
#[derive(Clone, Copy, Debug)]
pub struct TargetFitness {
    target: f64,
}

impl TargetFitness {
    /// A limit that stops at the given fitness
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl<C: Chromosome> Limit<C> for TargetFitness {
    fn holds(&self, state: &EvolutionState<C>) -> bool {
        match state.best_fitness {
            Some(best) => !state.ranker.reached(best, self.target),
            None => true,
        }
    }
}

/// Ad-hoc limit from a closure over the state.
pub struct ListenLimit<C: Chromosome> {
    predicate: Box<dyn Fn(&EvolutionState<C>) -> bool + Send + Sync>,
}

impl<C: Chromosome> ListenLimit<C> {
    /// Wrap a continuation predicate: return true to keep evolving
    pub fn new(predicate: impl Fn(&EvolutionState<C>) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C: Chromosome> Limit<C> for ListenLimit<C> {
    fn holds(&self, state: &EvolutionState<C>) -> bool {
        (self.predicate)(state)
    }
}

/// Convenience for the engine: true only while every limit holds
pub fn all_hold<C: Chromosome>(limits: &[Box<dyn Limit<C>>], state: &EvolutionState<C>) -> bool {
    limits.iter().all(|limit| limit.holds(state))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Limit, ListenLimit, MaxGenerations, SteadyGenerations, TargetFitness};
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::genetics::doubles::DoubleChromosome;
    use crate::genetics::genotype::Genotype;
    use crate::population::individual::Individual;
    use crate::population::population::Population;
    use crate::ranking::Ranker;

    fn state(generation: usize, steady: usize, best: Option<f64>) -> EvolutionState<DoubleChromosome> {
        let mut rng = StdRng::seed_from_u64(70);
        let population: Population<DoubleChromosome> = (0..2)
            .map(|_| {
                Individual::new(Genotype::new(vec![DoubleChromosome::random(
                    1,
                    0.0..1.0,
                    &mut rng,
                )]))
            })
            .collect();
        let mut s = EvolutionState::initial(population, Ranker::maximize());
        s.generation = generation;
        s.steady = steady;
        s.best_fitness = best;
        s
    }

    #[test]
    fn test_max_generations_boundary() {
        let limit = MaxGenerations::new(5).unwrap();
        for generation in 0..=5 {
            assert!(Limit::<DoubleChromosome>::holds(&limit, &state(generation, 0, None)));
        }
        assert!(!Limit::<DoubleChromosome>::holds(&limit, &state(6, 0, None)));
        assert!(!Limit::<DoubleChromosome>::holds(&limit, &state(100, 0, None)));
    }

    #[test]
    fn test_max_generations_rejects_zero() {
        assert!(MaxGenerations::new(0).is_err());
    }

    #[test]
    fn test_steady_generations() {
        let limit = SteadyGenerations::new(3).unwrap();
        assert!(Limit::<DoubleChromosome>::holds(&limit, &state(10, 0, None)));
        assert!(Limit::<DoubleChromosome>::holds(&limit, &state(10, 2, None)));
        assert!(!Limit::<DoubleChromosome>::holds(&limit, &state(10, 3, None)));
        assert!(SteadyGenerations::new(0).is_err());
    }

    #[test]
    fn test_target_fitness_maximize() {
        let limit = TargetFitness::new(10.0);
        assert!(Limit::<DoubleChromosome>::holds(&limit, &state(1, 0, None)));
        assert!(Limit::<DoubleChromosome>::holds(&limit, &state(1, 0, Some(9.0))));
        assert!(!Limit::<DoubleChromosome>::holds(&limit, &state(1, 0, Some(10.0))));
        assert!(!Limit::<DoubleChromosome>::holds(&limit, &state(1, 0, Some(11.0))));
    }

    #[test]
    fn test_target_fitness_minimize() {
        let limit = TargetFitness::new(1.0);
        let mut s = state(1, 0, Some(0.5));
        s.ranker = Ranker::minimize();
        assert!(!limit.holds(&s));
        s.best_fitness = Some(2.0);
        assert!(limit.holds(&s));
    }

    #[test]
    fn test_listen_limit() {
        let limit = ListenLimit::new(|s: &EvolutionState<DoubleChromosome>| s.generation < 2);
        assert!(limit.holds(&state(1, 0, None)));
        assert!(!limit.holds(&state(2, 0, None)));
    }

    #[test]
    fn test_all_hold_is_conjunction() {
        let limits: Vec<Box<dyn Limit<DoubleChromosome>>> = vec![
            Box::new(MaxGenerations::new(5).unwrap()),
            Box::new(SteadyGenerations::new(3).unwrap()),
        ];
        assert!(all_hold(&limits, &state(3, 1, None)));
        assert!(!all_hold(&limits, &state(3, 3, None)));
        assert!(!all_hold(&limits, &state(6, 1, None)));
    }
}
