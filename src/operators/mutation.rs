//! Mutation operator

use rand::RngCore;
use rand_distr::{Bernoulli, Distribution};

use crate::error::{EvoResult, EvolutionError};
use crate::genetics::chromosome::Chromosome;
use crate::genetics::gene::Gene;
use crate::operators::traits::Alterer;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Per-gene Bernoulli mutation.
///
/// Every gene independently mutates with probability `probability`, via
/// [`Gene::mutate`]. Working at gene granularity keeps the mutation rate
/// comparable across chromosome lengths. Individuals whose genotype was
/// touched lose their cached fitness; untouched individuals keep it.
#[derive(Clone, Debug)]
pub struct Mutator {
    /// Per-gene mutation probability
    pub probability: f64,
}

impl Mutator {
    /// Create a mutator with the given per-gene probability
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self { probability }
    }
}

impl<C: Chromosome> Alterer<C> for Mutator {
    fn alter(
        &self,
        population: Population<C>,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        let trial = Bernoulli::new(self.probability).map_err(|_| {
            EvolutionError::InvalidOperation("mutation probability outside [0, 1]")
        })?;

        let mut out = Population::with_capacity(population.len());
        for individual in population {
            let mut touched = false;
            let chromosomes = individual
                .genotype
                .iter()
                .map(|chromosome| {
                    let genes = chromosome
                        .genes()
                        .iter()
                        .map(|gene| {
                            if trial.sample(rng) {
                                touched = true;
                                gene.mutate(rng)
                            } else {
                                gene.clone()
                            }
                        })
                        .collect();
                    chromosome.with_genes(genes)
                })
                .collect();

            if touched {
                out.push(Individual::new(individual.genotype.with_chromosomes(chromosomes)));
            } else {
                out.push(individual);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::genetics::doubles::{DoubleChromosome, DoubleGene};
    use crate::genetics::genotype::Genotype;

    fn population(size: usize, genes_per: usize) -> Population<DoubleChromosome> {
        (0..size)
            .map(|_| {
                let genes = (0..genes_per)
                    .map(|_| DoubleGene::new(0.5, 0.0..1.0))
                    .collect();
                Individual::with_fitness(
                    Genotype::new(vec![DoubleChromosome::new(genes)]),
                    1.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mutator = Mutator::new(0.0);
        let pop = population(5, 4);
        let expected = pop.clone();
        let mut rng = StdRng::seed_from_u64(50);
        assert_eq!(mutator.alter(pop, &mut rng).unwrap(), expected);
    }

    #[test]
    fn test_full_probability_mutates_every_gene() {
        let mutator = Mutator::new(1.0);
        let pop = population(5, 4);
        let mut rng = StdRng::seed_from_u64(51);
        let out = mutator.alter(pop, &mut rng).unwrap();

        // every individual was touched, so every cache is invalidated
        assert!(out.iter().all(|i| i.fitness.is_none()));
        // all mutants stay within the gene's domain
        assert!(out.iter().all(|i| i.verify()));
    }

    #[test]
    fn test_preserves_population_and_chromosome_sizes() {
        let mutator = Mutator::new(0.5);
        let pop = population(6, 8);
        let mut rng = StdRng::seed_from_u64(52);
        let out = mutator.alter(pop, &mut rng).unwrap();
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|i| i.genotype.gene_count() == 8));
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mutator = Mutator::new(0.3);
        let a = mutator
            .alter(population(4, 4), &mut StdRng::seed_from_u64(53))
            .unwrap();
        let b = mutator
            .alter(population(4, 4), &mut StdRng::seed_from_u64(53))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "Probability must be in [0, 1]")]
    fn test_invalid_probability_panics() {
        Mutator::new(-0.1);
    }
}
