//! Population container type

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::fitness::FitnessFunction;
use crate::genetics::chromosome::Chromosome;
use crate::population::individual::Individual;

/// An ordered sequence of individuals evolved together.
///
/// Order is meaningful: selectors and alterers consume individuals
/// positionally, and ranked populations are stored best-first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Population<C: Chromosome> {
    individuals: Vec<Individual<C>>,
}

impl<C: Chromosome> Population<C> {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Create an empty population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual<C>>) -> Self {
        Self { individuals }
    }

    /// Number of individuals
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// True if the population holds no individuals
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual<C>> {
        self.individuals.get(index)
    }

    /// Add an individual
    pub fn push(&mut self, individual: Individual<C>) {
        self.individuals.push(individual);
    }

    /// Append every individual of `other`
    pub fn extend(&mut self, other: Population<C>) {
        self.individuals.extend(other.individuals);
    }

    /// Keep only the first `len` individuals
    pub fn truncate(&mut self, len: usize) {
        self.individuals.truncate(len);
    }

    /// Iterate over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual<C>> {
        self.individuals.iter()
    }

    /// Iterate mutably over the individuals
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual<C>> {
        self.individuals.iter_mut()
    }

    /// The underlying slice of individuals
    pub fn individuals(&self) -> &[Individual<C>] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual<C>> {
        self.individuals
    }

    /// True once every individual has a fitness
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(Individual::is_evaluated)
    }

    /// Mean fitness over evaluated individuals
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();
        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Sample standard deviation of fitness over evaluated individuals
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();
        if evaluated.len() < 2 {
            return None;
        }
        let variance = evaluated.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
            / (evaluated.len() - 1) as f64;
        Some(variance.sqrt())
    }
}

#[cfg(feature = "parallel")]
impl<C: Chromosome> Population<C> {
    /// Evaluate every individual lacking a fitness, in parallel.
    ///
    /// Fitness evaluation is a pure map over independent individuals, so it
    /// is the one phase the engine may fan out.
    pub fn evaluate_with<F: FitnessFunction<C> + ?Sized>(&mut self, fitness: &F) {
        self.individuals
            .par_iter_mut()
            .filter(|i| !i.is_evaluated())
            .for_each(|individual| {
                individual.fitness = Some(fitness.evaluate(&individual.genotype));
            });
    }
}

#[cfg(not(feature = "parallel"))]
impl<C: Chromosome> Population<C> {
    /// Evaluate every individual lacking a fitness, sequentially.
    pub fn evaluate_with<F: FitnessFunction<C> + ?Sized>(&mut self, fitness: &F) {
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                individual.fitness = Some(fitness.evaluate(&individual.genotype));
            }
        }
    }
}

impl<C: Chromosome> Default for Population<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chromosome> std::ops::Index<usize> for Population<C> {
    type Output = Individual<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<C: Chromosome> IntoIterator for Population<C> {
    type Item = Individual<C>;
    type IntoIter = std::vec::IntoIter<Individual<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<C: Chromosome> FromIterator<Individual<C>> for Population<C> {
    fn from_iter<I: IntoIterator<Item = Individual<C>>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
