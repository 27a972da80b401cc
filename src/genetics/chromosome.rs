//! Core chromosome trait
//!
//! A chromosome is an ordered, non-empty, fixed-length sequence of genes of
//! one kind.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::genetics::gene::Gene;

/// Ordered sequence of genes of identical kind.
///
/// Length is fixed once constructed; chromosomes are immutable value types,
/// and altered copies are produced through [`Chromosome::with_genes`].
pub trait Chromosome:
    Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The gene kind this chromosome is built from
    type Gene: Gene;

    /// The genes of this chromosome, in order
    fn genes(&self) -> &[Self::Gene];

    /// Duplicate this chromosome with a replacement gene sequence.
    ///
    /// Carries every non-gene property (constraints, metadata) unchanged.
    fn with_genes(&self, genes: Vec<Self::Gene>) -> Self;

    /// Number of genes
    fn len(&self) -> usize {
        self.genes().len()
    }

    /// True if the chromosome holds no genes. A valid chromosome never is;
    /// this exists for container-style completeness.
    fn is_empty(&self) -> bool {
        self.genes().is_empty()
    }

    /// True iff the chromosome is non-empty and every gene verifies.
    ///
    /// Kinds with cross-gene constraints (e.g. permutations) override this
    /// and AND their own predicate on top.
    fn verify(&self) -> bool {
        !self.is_empty() && self.genes().iter().all(Gene::verify)
    }

    /// The carried values of every gene, in order
    fn values(&self) -> Vec<<Self::Gene as Gene>::Value> {
        self.genes().iter().map(|g| g.value().clone()).collect()
    }
}
