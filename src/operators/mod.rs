//! Selection and alteration operators

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod traits;

pub use crossover::{MeanCrossover, SinglePointCrossover};
pub use mutation::Mutator;
pub use selection::{RandomSelector, RouletteWheelSelector, TournamentSelector};
pub use traits::{Alterer, AltererPipeline, Selector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        Alterer, AltererPipeline, MeanCrossover, Mutator, RandomSelector, RouletteWheelSelector,
        Selector, SinglePointCrossover, TournamentSelector,
    };
}
