//! Individuals and populations

pub mod individual;
pub mod population;

pub use individual::Individual;
pub use population::Population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Individual, Population};
}
