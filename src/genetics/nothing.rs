//! The uninhabited sentinel gene
//!
//! Generic algorithms are sometimes written against "no data" placeholders,
//! e.g. when type-checking an operator pipeline before a concrete gene kind
//! is chosen. `NothingGene` fills that role: it is never constructible, so
//! every operation on it is statically unreachable rather than a runtime
//! default that silently misbehaves.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::genetics::gene::Gene;

/// The uninhabited value type carried by [`NothingGene`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nothing {}

/// A gene over an empty domain.
///
/// No value of this type exists; the impl bodies below are proofs of
/// unreachability, not code paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NothingGene {}

impl Gene for NothingGene {
    type Value = Nothing;

    fn value(&self) -> &Nothing {
        match *self {}
    }

    fn generate(&self, _rng: &mut dyn RngCore) -> Nothing {
        match *self {}
    }

    fn with_value(&self, _value: Nothing) -> Self {
        match *self {}
    }

    fn verify(&self) -> bool {
        match *self {}
    }
}
