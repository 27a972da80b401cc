//! Error types for gentide
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Aggregated constraint violations found in a single validation pass.
///
/// Configuration validation collects every violation it finds instead of
/// stopping at the first, so one error can report all of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("constraint violations: {}", .violations.join("; "))]
pub struct ConstraintViolations {
    /// Human-readable descriptions of each violated constraint
    pub violations: Vec<String>,
}

impl ConstraintViolations {
    /// Create from a list of violation messages
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    /// Create from a single violation message
    pub fn single(violation: impl Into<String>) -> Self {
        Self {
            violations: vec![violation.into()],
        }
    }

    /// Number of independent violations carried by this error
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True if no violations were recorded
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// One or more configuration constraints were violated
    #[error(transparent)]
    Constraint(#[from] ConstraintViolations),

    /// Chromosome or genotype indexing outside `0..size`
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Operation invoked on a value that cannot support it, e.g. selecting
    /// from unevaluated individuals. Signals a programming error.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// A crossover was handed a parent count it was not configured for
    #[error("crossover arity mismatch: configured for {expected} parents, got {actual}")]
    CrossoverArity { expected: usize, actual: usize },

    /// An operation that requires individuals was given none
    #[error("empty population")]
    EmptyPopulation,

    /// A timing field was read before its phase started or finished
    #[error("phase timing not available: {0}")]
    TimingUnavailable(&'static str),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

/// Accumulates constraint violations across a validation pass.
///
/// `finish()` yields `Ok(())` when nothing was recorded, otherwise a single
/// [`ConstraintViolations`] carrying everything found.
#[derive(Debug, Default)]
pub struct ConstraintCheck {
    violations: Vec<String>,
}

impl ConstraintCheck {
    /// Start an empty validation pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless `ok` holds
    pub fn require(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.violations.push(message.into());
        }
        self
    }

    /// Finish the pass, reporting every recorded violation at once
    pub fn finish(self) -> Result<(), ConstraintViolations> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ConstraintViolations::new(self.violations))
        }
    }
}
