//! Fitness evaluation
//!
//! The engine consumes a caller-supplied fitness function scoring a genotype
//! as an `f64`. It is assumed deterministic for a given genotype, which is
//! what makes per-individual caching sound. Panics raised inside a fitness
//! function are not caught anywhere in the crate; they abort the run.

use crate::genetics::chromosome::Chromosome;
use crate::genetics::genotype::Genotype;

/// Scores a genotype's quality.
///
/// `Sync` so evaluation can fan out across individuals within a generation.
pub trait FitnessFunction<C: Chromosome>: Sync {
    /// Compute the fitness of one genotype
    fn evaluate(&self, genotype: &Genotype<C>) -> f64;
}

impl<C, F> FitnessFunction<C> for F
where
    C: Chromosome,
    F: Fn(&Genotype<C>) -> f64 + Sync,
{
    fn evaluate(&self, genotype: &Genotype<C>) -> f64 {
        self(genotype)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::FitnessFunction;
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::genetics::doubles::DoubleChromosome;

    #[test]
    fn test_closure_as_fitness_function() {
        let fitness = |genotype: &Genotype<DoubleChromosome>| -> f64 {
            genotype.flatten().iter().sum()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let genotype = Genotype::new(vec![DoubleChromosome::random(5, 0.0..1.0, &mut rng)]);
        let expected: f64 = genotype.flatten().iter().sum();
        assert_eq!(fitness.evaluate(&genotype), expected);
    }
}
