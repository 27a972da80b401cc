//! Boolean genes and chromosomes, for bit-string style problems

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::genetics::chromosome::Chromosome;
use crate::genetics::gene::Gene;

/// A gene holding a `bool`, regenerated with a fixed true-rate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolGene {
    value: bool,
    true_rate: f64,
}

impl BoolGene {
    /// Create a gene with an explicit value and generation rate
    pub fn new(value: bool, true_rate: f64) -> Self {
        Self { value, true_rate }
    }

    /// Create a gene drawn with probability `true_rate` of being true
    pub fn random(true_rate: f64, rng: &mut dyn RngCore) -> Self {
        let value = rng.gen_bool(true_rate);
        Self { value, true_rate }
    }

    /// Probability that a regenerated value is true
    pub fn true_rate(&self) -> f64 {
        self.true_rate
    }
}

impl Gene for BoolGene {
    type Value = bool;

    fn value(&self) -> &bool {
        &self.value
    }

    fn generate(&self, rng: &mut dyn RngCore) -> bool {
        rng.gen_bool(self.true_rate)
    }

    fn with_value(&self, value: bool) -> Self {
        Self {
            value,
            true_rate: self.true_rate,
        }
    }

    fn verify(&self) -> bool {
        (0.0..=1.0).contains(&self.true_rate)
    }
}

/// A fixed-length sequence of [`BoolGene`]s
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolChromosome {
    genes: Vec<BoolGene>,
}

impl BoolChromosome {
    /// Create a chromosome from explicit genes
    pub fn new(genes: Vec<BoolGene>) -> Self {
        Self { genes }
    }

    /// Create a chromosome of `len` genes with the given true-rate
    pub fn random(len: usize, true_rate: f64, rng: &mut dyn RngCore) -> Self {
        let genes = (0..len)
            .map(|_| BoolGene::random(true_rate, rng))
            .collect();
        Self { genes }
    }

    /// Number of true genes
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|g| *g.value()).count()
    }
}

impl Chromosome for BoolChromosome {
    type Gene = BoolGene;

    fn genes(&self) -> &[BoolGene] {
        &self.genes
    }

    fn with_genes(&self, genes: Vec<BoolGene>) -> Self {
        Self { genes }
    }
}
