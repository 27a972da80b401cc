//! Individual wrapper type
//!
//! An individual pairs a genotype with its lazily computed fitness.

use serde::{Deserialize, Serialize};

use crate::genetics::chromosome::Chromosome;
use crate::genetics::genotype::Genotype;

/// A genotype paired with an optional, cached fitness score.
///
/// Fitness stays `None` until evaluation; once set it is stable for this
/// genotype instance and is never recomputed implicitly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Individual<C: Chromosome> {
    /// The full solution encoding
    pub genotype: Genotype<C>,
    /// The cached fitness value (None if not yet evaluated)
    pub fitness: Option<f64>,
}

impl<C: Chromosome> Individual<C> {
    /// Create an unevaluated individual
    pub fn new(genotype: Genotype<C>) -> Self {
        Self {
            genotype,
            fitness: None,
        }
    }

    /// Create an individual with a known fitness
    pub fn with_fitness(genotype: Genotype<C>, fitness: f64) -> Self {
        Self {
            genotype,
            fitness: Some(fitness),
        }
    }

    /// True once fitness has been computed
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// The genotype of this individual
    pub fn genotype(&self) -> &Genotype<C> {
        &self.genotype
    }

    /// True iff the genotype verifies
    pub fn verify(&self) -> bool {
        self.genotype.verify()
    }
}
