//! Floating-point genes and chromosomes

use std::ops::Range;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::genetics::chromosome::Chromosome;
use crate::genetics::gene::{Gene, NumericGene};

/// A gene holding an `f64` drawn from a half-open range.
///
/// The range travels with the gene: duplicates and mutants carry the same
/// domain, so [`Gene::verify`] means the same thing across a lineage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoubleGene {
    value: f64,
    range: Range<f64>,
}

impl DoubleGene {
    /// Create a gene with an explicit value and domain
    pub fn new(value: f64, range: Range<f64>) -> Self {
        Self { value, range }
    }

    /// Create a gene with a uniformly drawn value
    pub fn random(range: Range<f64>, rng: &mut dyn RngCore) -> Self {
        let value = rng.gen_range(range.clone());
        Self { value, range }
    }

    /// The domain this gene's values are drawn from
    pub fn range(&self) -> &Range<f64> {
        &self.range
    }
}

impl Gene for DoubleGene {
    type Value = f64;

    fn value(&self) -> &f64 {
        &self.value
    }

    fn generate(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(self.range.clone())
    }

    fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            range: self.range.clone(),
        }
    }

    fn verify(&self) -> bool {
        self.value.is_finite() && self.range.contains(&self.value)
    }
}

impl NumericGene for DoubleGene {
    fn average(&self, other: &Self) -> Self {
        self.with_value((self.value + other.value) / 2.0)
    }
}

/// A fixed-length sequence of [`DoubleGene`]s
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoubleChromosome {
    genes: Vec<DoubleGene>,
}

impl DoubleChromosome {
    /// Create a chromosome from explicit genes
    pub fn new(genes: Vec<DoubleGene>) -> Self {
        Self { genes }
    }

    /// Create a chromosome of `len` uniformly drawn genes sharing one domain
    pub fn random(len: usize, range: Range<f64>, rng: &mut dyn RngCore) -> Self {
        let genes = (0..len)
            .map(|_| DoubleGene::random(range.clone(), rng))
            .collect();
        Self { genes }
    }
}

impl Chromosome for DoubleChromosome {
    type Gene = DoubleGene;

    fn genes(&self) -> &[DoubleGene] {
        &self.genes
    }

    fn with_genes(&self, genes: Vec<DoubleGene>) -> Self {
        Self { genes }
    }
}
