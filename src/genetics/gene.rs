//! Core gene trait
//!
//! A gene is the smallest unit of genetic information: one value plus the
//! rule that produces a new candidate value from it.

use std::fmt::Debug;

use rand::RngCore;
use serde::{de::DeserializeOwned, Serialize};

/// Atomic value carrier with a controlled mutation rule.
///
/// Genes are immutable: mutation never changes the receiver, it produces a
/// fresh gene via [`Gene::with_value`]. A gene kind carries its domain
/// constraints (a numeric range, an alphabet, a rate) along into every
/// duplicate, so `with_value` preserves the validity predicate rather than
/// recomputing it from the value alone.
pub trait Gene: Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The carried value type
    type Value: Clone + Debug + PartialEq + Send + Sync;

    /// The current value of this gene
    fn value(&self) -> &Self::Value;

    /// Produce a new candidate value from the current one and a random source.
    ///
    /// This is the gene's generator rule: the returned value must satisfy the
    /// same domain constraints as the current one.
    fn generate(&self, rng: &mut dyn RngCore) -> Self::Value;

    /// Duplicate this gene with a new value, keeping every other property.
    ///
    /// The receiver is left unchanged.
    fn with_value(&self, value: Self::Value) -> Self;

    /// True if the carried value satisfies this gene kind's domain constraints
    fn verify(&self) -> bool;

    /// Mutate by duplicating with a freshly generated value.
    ///
    /// Defined uniformly for every gene kind; implementations supply only
    /// [`Gene::generate`] and never override this.
    fn mutate(&self, rng: &mut dyn RngCore) -> Self {
        let value = self.generate(rng);
        self.with_value(value)
    }
}

/// Genes whose values support arithmetic combination.
///
/// Required by blending crossovers such as
/// [`MeanCrossover`](crate::operators::crossover::MeanCrossover); the plain
/// [`Gene`] contract alone cannot express a numeric mean.
pub trait NumericGene: Gene {
    /// Duplicate this gene carrying the arithmetic mean of both values
    fn average(&self, other: &Self) -> Self;
}
