//! Ranking individuals by fitness
//!
//! A ranker turns raw fitness scores into a total order, interpreting them
//! under maximize or minimize semantics with a configurable equality
//! tolerance.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::genetics::chromosome::Chromosome;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Default absolute tolerance for treating two fitness values as equal
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Direction of optimization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Optimize {
    /// Higher fitness ranks better
    Maximize,
    /// Lower fitness ranks better
    Minimize,
}

/// Total order over individuals by fitness.
///
/// `compare(a, b)` returns `Greater` when `a` ranks better, `Equal` when the
/// two fitnesses agree within the tolerance (NaN-safe: NaN always ranks
/// worst), and the order is antisymmetric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ranker {
    optimize: Optimize,
    tolerance: f64,
}

impl Ranker {
    /// A ranker under which higher fitness is better
    pub fn maximize() -> Self {
        Self {
            optimize: Optimize::Maximize,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// A ranker under which lower fitness is better
    pub fn minimize() -> Self {
        Self {
            optimize: Optimize::Minimize,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Replace the equality tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The direction of optimization
    pub fn optimize(&self) -> Optimize {
        self.optimize
    }

    /// Compare two fitness values under this ranker's ordering.
    ///
    /// `Greater` means `a` ranks better than `b`.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        if (a - b).abs() <= self.tolerance {
            return Ordering::Equal;
        }
        let natural = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self.optimize {
            Optimize::Maximize => natural,
            Optimize::Minimize => natural.reverse(),
        }
    }

    /// Compare two individuals; unevaluated individuals rank worst
    pub fn compare_individuals<C: Chromosome>(
        &self,
        a: &Individual<C>,
        b: &Individual<C>,
    ) -> Ordering {
        match (a.fitness, b.fitness) {
            (Some(fa), Some(fb)) => self.compare(fa, fb),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }

    /// True if `new` strictly improves on `old` (beyond the tolerance)
    pub fn is_improvement(&self, new: f64, old: f64) -> bool {
        self.compare(new, old) == Ordering::Greater
    }

    /// True once `best` is at least as good as `target` under this ordering
    pub fn reached(&self, best: f64, target: f64) -> bool {
        self.compare(best, target) != Ordering::Less
    }

    /// Return the population's individuals ordered best-first.
    ///
    /// The sort is stable: equal-fitness individuals keep their relative
    /// input order.
    pub fn sort<C: Chromosome>(&self, population: &Population<C>) -> Population<C> {
        let mut individuals: Vec<Individual<C>> = population.individuals().to_vec();
        individuals.sort_by(|a, b| self.compare_individuals(b, a));
        Population::from_individuals(individuals)
    }

    /// The best individual of the population under this ordering
    pub fn best_of<'a, C: Chromosome>(
        &self,
        population: &'a Population<C>,
    ) -> Option<&'a Individual<C>> {
        population
            .iter()
            .max_by(|a, b| self.compare_individuals(a, b))
    }

    /// The best fitness present in the population, if any
    pub fn best_fitness<C: Chromosome>(&self, population: &Population<C>) -> Option<f64> {
        self.best_of(population).and_then(|i| i.fitness)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Optimize, Ranker, DEFAULT_TOLERANCE};
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::genetics::doubles::DoubleChromosome;
    use crate::genetics::genotype::Genotype;

    fn population(fitnesses: &[f64]) -> Population<DoubleChromosome> {
        let mut rng = StdRng::seed_from_u64(12);
        fitnesses
            .iter()
            .map(|&f| {
                Individual::with_fitness(
                    Genotype::new(vec![DoubleChromosome::random(1, 0.0..1.0, &mut rng)]),
                    f,
                )
            })
            .collect()
    }

    #[test]
    fn test_maximize_ordering() {
        let ranker = Ranker::maximize();
        assert_eq!(ranker.compare(2.0, 1.0), Ordering::Greater);
        assert_eq!(ranker.compare(1.0, 2.0), Ordering::Less);
        assert_eq!(ranker.compare(1.0, 1.0), Ordering::Equal);
    }

    #[test]
    fn test_minimize_ordering() {
        let ranker = Ranker::minimize();
        assert_eq!(ranker.compare(1.0, 2.0), Ordering::Greater);
        assert_eq!(ranker.compare(2.0, 1.0), Ordering::Less);
    }

    #[test]
    fn test_tolerance_equality() {
        let ranker = Ranker::maximize().with_tolerance(0.1);
        assert_eq!(ranker.compare(1.0, 1.05), Ordering::Equal);
        assert_eq!(ranker.compare(1.0, 1.2), Ordering::Less);
    }

    #[test]
    fn test_nan_ranks_worst() {
        for ranker in [Ranker::maximize(), Ranker::minimize()] {
            assert_eq!(ranker.compare(f64::NAN, 0.0), Ordering::Less);
            assert_eq!(ranker.compare(0.0, f64::NAN), Ordering::Greater);
            assert_eq!(ranker.compare(f64::NAN, f64::NAN), Ordering::Equal);
        }
    }

    #[test]
    fn test_antisymmetry() {
        let ranker = Ranker::maximize();
        for (a, b) in [(1.0, 2.0), (2.0, 1.0), (3.0, 3.0)] {
            assert_eq!(ranker.compare(a, b), ranker.compare(b, a).reverse());
        }
    }

    #[test]
    fn test_sort_best_first() {
        let ranker = Ranker::maximize();
        let sorted = ranker.sort(&population(&[3.0, 1.0, 4.0, 1.5, 9.0]));
        let fitnesses: Vec<f64> = sorted.iter().filter_map(|i| i.fitness).collect();
        assert_eq!(fitnesses, vec![9.0, 4.0, 3.0, 1.5, 1.0]);

        for pair in sorted.individuals().windows(2) {
            assert_ne!(
                ranker.compare_individuals(&pair[0], &pair[1]),
                Ordering::Less
            );
        }
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let ranker = Ranker::maximize();
        let pop = population(&[2.0, 5.0, 2.0, 5.0]);
        let first_five = pop[1].clone();
        let second_five = pop[3].clone();
        let sorted = ranker.sort(&pop);
        assert_eq!(sorted[0], first_five);
        assert_eq!(sorted[1], second_five);
    }

    #[test]
    fn test_minimize_sort() {
        let ranker = Ranker::minimize();
        let sorted = ranker.sort(&population(&[3.0, 1.0, 4.0]));
        let fitnesses: Vec<f64> = sorted.iter().filter_map(|i| i.fitness).collect();
        assert_eq!(fitnesses, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_best_of_and_reached() {
        let ranker = Ranker::maximize();
        let pop = population(&[3.0, 9.0, 4.0]);
        assert_eq!(ranker.best_fitness(&pop), Some(9.0));
        assert!(ranker.reached(9.0, 9.0));
        assert!(ranker.reached(9.5, 9.0));
        assert!(!ranker.reached(8.0, 9.0));

        let ranker = Ranker::minimize();
        assert!(ranker.reached(0.5, 1.0));
        assert!(!ranker.reached(2.0, 1.0));
    }
}
