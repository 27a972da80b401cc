//! Character genes and chromosomes, for string-matching style problems

use std::ops::RangeInclusive;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::genetics::chromosome::Chromosome;
use crate::genetics::gene::Gene;

/// A gene holding a `char` drawn from an inclusive range
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharGene {
    value: char,
    range: RangeInclusive<char>,
}

impl CharGene {
    /// Create a gene with an explicit value and alphabet range
    pub fn new(value: char, range: RangeInclusive<char>) -> Self {
        Self { value, range }
    }

    /// Create a gene with a uniformly drawn value
    pub fn random(range: RangeInclusive<char>, rng: &mut dyn RngCore) -> Self {
        let value = rng.gen_range(range.clone());
        Self { value, range }
    }

    /// The alphabet this gene draws from
    pub fn range(&self) -> &RangeInclusive<char> {
        &self.range
    }
}

impl Gene for CharGene {
    type Value = char;

    fn value(&self) -> &char {
        &self.value
    }

    fn generate(&self, rng: &mut dyn RngCore) -> char {
        rng.gen_range(self.range.clone())
    }

    fn with_value(&self, value: char) -> Self {
        Self {
            value,
            range: self.range.clone(),
        }
    }

    fn verify(&self) -> bool {
        self.range.contains(&self.value)
    }
}

/// A fixed-length sequence of [`CharGene`]s
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharChromosome {
    genes: Vec<CharGene>,
}

impl CharChromosome {
    /// Create a chromosome from explicit genes
    pub fn new(genes: Vec<CharGene>) -> Self {
        Self { genes }
    }

    /// Create a chromosome of `len` uniformly drawn genes over one alphabet
    pub fn random(len: usize, range: RangeInclusive<char>, rng: &mut dyn RngCore) -> Self {
        let genes = (0..len)
            .map(|_| CharGene::random(range.clone(), rng))
            .collect();
        Self { genes }
    }

    /// Collect the gene values into a string
    pub fn as_string(&self) -> String {
        self.genes.iter().map(|g| *g.value()).collect()
    }
}

impl Chromosome for CharChromosome {
    type Gene = CharGene;

    fn genes(&self) -> &[CharGene] {
        &self.genes
    }

    fn with_genes(&self, genes: Vec<CharGene>) -> Self {
        Self { genes }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_gene_within_alphabet() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let gene = CharGene::random('A'..='Z', &mut rng);
            assert!(gene.verify());
            assert!(gene.value().is_ascii_uppercase());
        }
    }

    #[test]
    fn test_with_value_carries_alphabet() {
        let gene = CharGene::new('Q', 'A'..='Z');
        let copy = gene.with_value('B');
        assert_eq!(*copy.value(), 'B');
        assert_eq!(copy.range(), gene.range());
        assert!(copy.verify());
    }

    #[test]
    fn test_verify_rejects_outside_alphabet() {
        let gene = CharGene::new('q', 'A'..='Z');
        assert!(!gene.verify());
    }

    #[test]
    fn test_chromosome_as_string() {
        let genes = "AB"
            .chars()
            .map(|c| CharGene::new(c, 'A'..='Z'))
            .collect();
        let chromosome = CharChromosome::new(genes);
        assert_eq!(chromosome.as_string(), "AB");
        assert!(chromosome.verify());
    }
}
