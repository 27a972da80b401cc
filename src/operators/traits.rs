//! Operator traits
//!
//! Selectors sample individuals out of a population; alterers transform a
//! population into one of the same size. Both take the random source as an
//! explicit `&mut dyn RngCore` so operators stay object-safe and every draw
//! is attributable to one seedable generator.

use rand::RngCore;

use crate::error::EvoResult;
use crate::genetics::chromosome::Chromosome;
use crate::population::population::Population;
use crate::ranking::Ranker;

/// Selection operator.
///
/// Returns exactly `count` individuals sampled (with replacement unless a
/// concrete selector states otherwise) from the population, deterministic
/// given a seeded random source.
pub trait Selector<C: Chromosome>: Send + Sync {
    /// Select `count` individuals to act as parents or survivors
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        ranker: &Ranker,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>>;
}

/// Alteration operator: crossover or mutation.
///
/// A pure function from population to population of the same size.
pub trait Alterer<C: Chromosome>: Send + Sync {
    /// Transform the population, preserving its size
    fn alter(&self, population: Population<C>, rng: &mut dyn RngCore)
        -> EvoResult<Population<C>>;
}

/// An ordered list of alterers applied left-to-right.
///
/// Composition is concatenation, not interleaving: each stage sees the
/// previous stage's complete output.
#[derive(Default)]
pub struct AltererPipeline<C: Chromosome> {
    stages: Vec<Box<dyn Alterer<C>>>,
}

impl<C: Chromosome> AltererPipeline<C> {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage, returning the extended pipeline
    pub fn then(mut self, alterer: impl Alterer<C> + 'static) -> Self {
        self.stages.push(Box::new(alterer));
        self
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Take the stages out of the pipeline
    pub fn into_stages(self) -> Vec<Box<dyn Alterer<C>>> {
        self.stages
    }
}

impl<C: Chromosome> Alterer<C> for AltererPipeline<C> {
    fn alter(
        &self,
        population: Population<C>,
        rng: &mut dyn RngCore,
    ) -> EvoResult<Population<C>> {
        let mut current = population;
        for stage in &self.stages {
            current = stage.alter(current, rng)?;
        }
        Ok(current)
    }
}

impl<C: Chromosome> std::ops::Add for AltererPipeline<C> {
    type Output = AltererPipeline<C>;

    fn add(mut self, rhs: AltererPipeline<C>) -> Self::Output {
        self.stages.extend(rhs.stages);
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::genetics::doubles::DoubleChromosome;
    use crate::genetics::genotype::Genotype;
    use crate::population::individual::Individual;

    // Tags every individual's fitness so application order is observable.
    struct SetFitness(f64);

    impl Alterer<DoubleChromosome> for SetFitness {
        fn alter(
            &self,
            population: Population<DoubleChromosome>,
            _rng: &mut dyn RngCore,
        ) -> EvoResult<Population<DoubleChromosome>> {
            Ok(population
                .into_iter()
                .map(|i| Individual::with_fitness(i.genotype, self.0))
                .collect())
        }
    }

    fn small_population() -> Population<DoubleChromosome> {
        let mut rng = StdRng::seed_from_u64(1);
        (0..4)
            .map(|_| {
                Individual::new(Genotype::new(vec![DoubleChromosome::random(
                    2,
                    0.0..1.0,
                    &mut rng,
                )]))
            })
            .collect()
    }

    #[test]
    fn test_pipeline_applies_left_to_right() {
        let pipeline = AltererPipeline::new().then(SetFitness(1.0)).then(SetFitness(2.0));
        let mut rng = StdRng::seed_from_u64(0);
        let out = pipeline.alter(small_population(), &mut rng).unwrap();
        assert!(out.iter().all(|i| i.fitness == Some(2.0)));
    }

    #[test]
    fn test_pipeline_concatenation() {
        let a = AltererPipeline::new().then(SetFitness(1.0));
        let b = AltererPipeline::new().then(SetFitness(3.0));
        let combined = a + b;
        assert_eq!(combined.len(), 2);
        let mut rng = StdRng::seed_from_u64(0);
        let out = combined.alter(small_population(), &mut rng).unwrap();
        assert!(out.iter().all(|i| i.fitness == Some(3.0)));
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline: AltererPipeline<DoubleChromosome> = AltererPipeline::new();
        let pop = small_population();
        let expected = pop.clone();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pipeline.alter(pop, &mut rng).unwrap(), expected);
    }
}
