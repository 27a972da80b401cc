//! The evolution engine: configuration, state, records and the run loop

pub mod config;
pub mod evolver;
pub mod records;
pub mod state;

pub use config::{EvolverBuilder, DEFAULT_POPULATION_SIZE, DEFAULT_SURVIVAL_RATE};
pub use evolver::{EvolutionOutcome, Evolver, Phase};
pub use records::{EvolutionRecord, GenerationRecord, IndividualRecord, PhaseRecord};
pub use state::EvolutionState;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        EvolutionOutcome, EvolutionRecord, EvolutionState, Evolver, EvolverBuilder,
        GenerationRecord, IndividualRecord, Phase, PhaseRecord,
    };
}
