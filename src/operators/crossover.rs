//! Crossover operators
//!
//! Crossovers consume the incoming population pairwise in order. Each pair
//! recombines with the operator's probability; pairs that skip recombination
//! (and any odd trailing individual) pass through unchanged, keeping their
//! cached fitness.

use rand::{Rng, RngCore};

use crate::error::{EvoResult, EvolutionError};
use crate::genetics::chromosome::Chromosome;
use crate::genetics::gene::NumericGene;
use crate::genetics::genotype::Genotype;
use crate::operators::traits::Alterer;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Apply a two-parent recombination across the population, pair by pair.
fn recombine_pairwise<C, F>(
    population: Population<C>,
    probability: f64,
    rng: &mut dyn RngCore,
    mut cross: F,
) -> EvoResult<Population<C>>
where
    C: Chromosome,
    F: FnMut(&Genotype<C>, &Genotype<C>, &mut dyn RngCore) -> EvoResult<(Genotype<C>, Genotype<C>)>,
{
    let individuals = population.into_individuals();
    let mut out = Population::with_capacity(individuals.len());

    let mut iter = individuals.into_iter();
    while let Some(first) = iter.next() {
        let Some(second) = iter.next() else {
            // odd tail has no partner
            out.push(first);
            break;
        };
        if rng.gen::<f64>() < probability {
            let (c1, c2) = cross(&first.genotype, &second.genotype, rng)?;
            out.push(Individual::new(c1));
            out.push(Individual::new(c2));
        } else {
            out.push(first);
            out.push(second);
        }
    }
    Ok(out)
}

/// Single-point crossover.
///
/// For every chromosome, one cut index is chosen uniformly in
/// `[1, len - 1]`; offspring 1 takes parent 1's genes before the cut and
/// parent 2's after, offspring 2 the complement. Chromosomes shorter than
/// two genes pass through uncut.
#[derive(Clone, Debug)]
pub struct SinglePointCrossover {
    /// Probability that a given parent pair recombines
    pub probability: f64,
}

impl SinglePointCrossover {
    /// Create with the given recombination probability
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self { probability }
    }

    /// Number of parents this operator recombines at a time
    pub fn parent_count(&self) -> usize {
        2
    }

    /// Recombine exactly `parent_count()` parents into as many offspring.
    ///
    /// A parent slice of any other length is a configuration error, never a
    /// silently truncated or padded result.
    pub fn cross<C: Chromosome>(
        &self,
        parents: &[Genotype<C>],
        rng: &mut dyn RngCore,
    ) -> EvoResult<Vec<Genotype<C>>> {
        if parents.len() != self.parent_count() {
            return Err(EvolutionError::CrossoverArity {
                expected: self.parent_count(),
                actual: parents.len(),
            });
        }
        let (c1, c2) = single_point(&parents[0], &parents[1], rng);
        Ok(vec![c1, c2])
    }
}

fn single_point<C: Chromosome>(
    parent1: &Genotype<C>,
    parent2: &Genotype<C>,
    rng: &mut dyn RngCore,
) -> (Genotype<C>, Genotype<C>) {
    let mut chromosomes1 = Vec::with_capacity(parent1.len());
    let mut chromosomes2 = Vec::with_capacity(parent2.len());

    for (a, b) in parent1.iter().zip(parent2.iter()) {
        let len = a.len().min(b.len());
        if len < 2 {
            chromosomes1.push(a.clone());
            chromosomes2.push(b.clone());
            continue;
        }
        let cut = rng.gen_range(1..len);
        let genes1: Vec<_> = a.genes()[..cut]
            .iter()
            .chain(b.genes()[cut..].iter())
            .cloned()
            .collect();
        let genes2: Vec<_> = b.genes()[..cut]
            .iter()
            .chain(a.genes()[cut..].iter())
            .cloned()
            .collect();
        chromosomes1.push(a.with_genes(genes1));
        chromosomes2.push(b.with_genes(genes2));
    }

    (
        parent1.with_chromosomes(chromosomes1),
        parent2.with_chromosomes(chromosomes2),
    )
}

impl<C: Chromosome> Alterer<C> for SinglePointCrossover {
    fn alter(
        &self,
        population: Population<C>,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        recombine_pairwise(population, self.probability, rng, |p1, p2, rng| {
            Ok(single_point(p1, p2, rng))
        })
    }
}

/// Mean (average) crossover for numeric genes.
///
/// Both offspring carry, at every locus, the arithmetic mean of the two
/// parents' values. Requires [`NumericGene`]; the generic gene contract
/// alone cannot combine values arithmetically.
#[derive(Clone, Debug)]
pub struct MeanCrossover {
    /// Probability that a given parent pair recombines
    pub probability: f64,
}

impl MeanCrossover {
    /// Create with the given recombination probability
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self { probability }
    }

    /// Number of parents this operator recombines at a time
    pub fn parent_count(&self) -> usize {
        2
    }

    /// Recombine exactly `parent_count()` parents; see [`SinglePointCrossover::cross`]
    pub fn cross<C>(
        &self,
        parents: &[Genotype<C>],
        _rng: &mut dyn RngCore,
    ) -> EvoResult<Vec<Genotype<C>>>
    where
        C: Chromosome,
        C::Gene: NumericGene,
    {
        if parents.len() != self.parent_count() {
            return Err(EvolutionError::CrossoverArity {
                expected: self.parent_count(),
                actual: parents.len(),
            });
        }
        let child = mean(&parents[0], &parents[1]);
        Ok(vec![child.clone(), child])
    }
}

fn mean<C>(parent1: &Genotype<C>, parent2: &Genotype<C>) -> Genotype<C>
where
    C: Chromosome,
    C::Gene: NumericGene,
{
    let chromosomes = parent1
        .iter()
        .zip(parent2.iter())
        .map(|(a, b)| {
            let genes = a
                .genes()
                .iter()
                .zip(b.genes().iter())
                .map(|(ga, gb)| ga.average(gb))
                .collect();
            a.with_genes(genes)
        })
        .collect();
    parent1.with_chromosomes(chromosomes)
}

impl<C> Alterer<C> for MeanCrossover
where
    C: Chromosome,
    C::Gene: NumericGene,
{
    fn alter(
        &self,
        population: Population<C>,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        recombine_pairwise(population, self.probability, rng, |p1, p2, _rng| {
            let child = mean(p1, p2);
            Ok((child.clone(), child))
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::genetics::doubles::{DoubleChromosome, DoubleGene};

    fn genotype(values: &[f64]) -> Genotype<DoubleChromosome> {
        let genes = values
            .iter()
            .map(|&v| DoubleGene::new(v, 0.0..10.0))
            .collect();
        Genotype::new(vec![DoubleChromosome::new(genes)])
    }

    #[test]
    fn test_single_point_offspring_are_complementary() {
        let p1 = genotype(&[1.0, 1.0, 1.0, 1.0]);
        let p2 = genotype(&[2.0, 2.0, 2.0, 2.0]);
        let op = SinglePointCrossover::new(1.0);
        let mut rng = StdRng::seed_from_u64(40);

        let offspring = op.cross(&[p1, p2], &mut rng).unwrap();
        assert_eq!(offspring.len(), 2);

        let flat1 = offspring[0].flatten();
        let flat2 = offspring[1].flatten();
        assert_eq!(flat1.len(), 4);

        // one cut: a prefix of ones then twos, and the complement
        let cut = flat1.iter().position(|&v| v == 2.0).unwrap();
        assert!(cut >= 1 && cut < 4);
        assert!(flat1[..cut].iter().all(|&v| v == 1.0));
        assert!(flat1[cut..].iter().all(|&v| v == 2.0));
        assert!(flat2[..cut].iter().all(|&v| v == 2.0));
        assert!(flat2[cut..].iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_single_point_arity_error() {
        let op = SinglePointCrossover::new(1.0);
        let parents = vec![
            genotype(&[1.0, 2.0]),
            genotype(&[3.0, 4.0]),
            genotype(&[5.0, 6.0]),
        ];
        let mut rng = StdRng::seed_from_u64(41);
        let err = op.cross(&parents, &mut rng).unwrap_err();
        assert_eq!(
            err,
            EvolutionError::CrossoverArity {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_alterer_preserves_population_size() {
        let op = SinglePointCrossover::new(1.0);
        let mut rng = StdRng::seed_from_u64(42);
        for size in [1usize, 2, 5, 8] {
            let population: Population<DoubleChromosome> = (0..size)
                .map(|i| Individual::new(genotype(&[i as f64, i as f64])))
                .collect();
            let out = op.alter(population, &mut rng).unwrap();
            assert_eq!(out.len(), size);
        }
    }

    #[test]
    fn test_zero_probability_passes_parents_through() {
        let op = SinglePointCrossover::new(0.0);
        let mut rng = StdRng::seed_from_u64(43);
        let population: Population<DoubleChromosome> = vec![
            Individual::with_fitness(genotype(&[1.0, 2.0]), 7.0),
            Individual::with_fitness(genotype(&[3.0, 4.0]), 8.0),
        ]
        .into_iter()
        .collect();
        let expected = population.clone();
        let out = op.alter(population, &mut rng).unwrap();
        // untouched pairs keep their cached fitness
        assert_eq!(out, expected);
    }

    #[test]
    fn test_recombined_offspring_are_unevaluated() {
        let op = SinglePointCrossover::new(1.0);
        let mut rng = StdRng::seed_from_u64(44);
        let population: Population<DoubleChromosome> = vec![
            Individual::with_fitness(genotype(&[1.0, 2.0]), 7.0),
            Individual::with_fitness(genotype(&[3.0, 4.0]), 8.0),
        ]
        .into_iter()
        .collect();
        let out = op.alter(population, &mut rng).unwrap();
        assert!(out.iter().all(|i| i.fitness.is_none()));
    }

    #[test]
    fn test_mean_crossover_blends_values() {
        let p1 = genotype(&[1.0, 3.0]);
        let p2 = genotype(&[3.0, 5.0]);
        let op = MeanCrossover::new(1.0);
        let mut rng = StdRng::seed_from_u64(45);
        let offspring = op.cross(&[p1, p2], &mut rng).unwrap();
        assert_eq!(offspring[0].flatten(), vec![2.0, 4.0]);
        assert_eq!(offspring[1].flatten(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_mean_crossover_arity_error() {
        let op = MeanCrossover::new(1.0);
        let parents = vec![genotype(&[1.0])];
        let mut rng = StdRng::seed_from_u64(46);
        let err = op.cross(&parents, &mut rng).unwrap_err();
        assert_eq!(
            err,
            EvolutionError::CrossoverArity {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    #[should_panic(expected = "Probability must be in [0, 1]")]
    fn test_invalid_probability_panics() {
        SinglePointCrossover::new(1.5);
    }
}
