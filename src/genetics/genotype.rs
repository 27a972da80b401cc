//! Genotype: the full encoding of one candidate solution
//!
//! A genotype is an ordered sequence of chromosomes, plus the factory
//! protocol used to create random genotypes during initialization.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::genetics::chromosome::Chromosome;
use crate::genetics::gene::Gene;

/// Ordered sequence of chromosomes encoding one candidate solution.
///
/// Immutable once constructed; owned by exactly one
/// [`Individual`](crate::population::Individual).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Genotype<C: Chromosome> {
    chromosomes: Vec<C>,
}

impl<C: Chromosome> Genotype<C> {
    /// Create a genotype from its chromosomes
    pub fn new(chromosomes: Vec<C>) -> Self {
        Self { chromosomes }
    }

    /// The chromosomes of this genotype, in order
    pub fn chromosomes(&self) -> &[C] {
        &self.chromosomes
    }

    /// Number of chromosomes
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// True if the genotype holds no chromosomes
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Bounds-checked access to the chromosome at `index`
    pub fn get(&self, index: usize) -> EvoResult<&C> {
        self.chromosomes
            .get(index)
            .ok_or(EvolutionError::IndexOutOfBounds {
                index,
                size: self.chromosomes.len(),
            })
    }

    /// Iterate over the chromosomes
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.chromosomes.iter()
    }

    /// Duplicate this genotype with a replacement chromosome sequence
    pub fn with_chromosomes(&self, chromosomes: Vec<C>) -> Self {
        Self { chromosomes }
    }

    /// Concatenate every contained gene's value into one flat sequence.
    ///
    /// This is the view fitness functions consume.
    pub fn flatten(&self) -> Vec<<C::Gene as Gene>::Value> {
        self.chromosomes
            .iter()
            .flat_map(|c| c.genes().iter().map(|g| g.value().clone()))
            .collect()
    }

    /// True iff every chromosome verifies
    pub fn verify(&self) -> bool {
        self.chromosomes.iter().all(Chromosome::verify)
    }

    /// Total gene count across all chromosomes
    pub fn gene_count(&self) -> usize {
        self.chromosomes.iter().map(Chromosome::len).sum()
    }
}

impl<C: Chromosome> FromIterator<C> for Genotype<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Produces random genotypes, used once per initial individual.
pub trait GenotypeFactory<C: Chromosome>: Send + Sync {
    /// Create one random genotype
    fn create(&self, rng: &mut dyn RngCore) -> Genotype<C>;
}

impl<C, F> GenotypeFactory<C> for F
where
    C: Chromosome,
    F: Fn(&mut dyn RngCore) -> Genotype<C> + Send + Sync,
{
    fn create(&self, rng: &mut dyn RngCore) -> Genotype<C> {
        self(rng)
    }
}
