//! Evolution listeners
//!
//! Listeners observe the run without steering it: every hook has a no-op
//! default, so an implementation overrides only the phases it cares about.
//! The engine invokes hooks synchronously, in registration order.

use std::sync::{Arc, Mutex};

use crate::engine::records::{EvolutionRecord, GenerationRecord};
use crate::engine::state::EvolutionState;
use crate::genetics::chromosome::Chromosome;
use crate::population::population::Population;

/// Observer of evolution phase boundaries.
///
/// Hooks take `&mut self` so listeners can accumulate state across calls.
pub trait EvolutionListener<C: Chromosome>: Send {
    /// The initial population is about to be created
    fn on_initialization_started(&mut self) {}

    /// The initial population exists and is evaluated
    fn on_initialization_ended(&mut self, state: &EvolutionState<C>) {
        let _ = state;
    }

    /// A generation loop iteration begins
    fn on_generation_started(&mut self, state: &EvolutionState<C>) {
        let _ = state;
    }

    /// A generation finished; `record` holds its parents, offspring and timing
    fn on_generation_ended(&mut self, state: &EvolutionState<C>, record: &GenerationRecord<C>) {
        let _ = (state, record);
    }

    /// Fitness evaluation of the current generation begins
    fn on_evaluation_started(&mut self, generation: usize) {
        let _ = generation;
    }

    /// Every individual of the current generation has a fitness
    fn on_evaluation_ended(&mut self, state: &EvolutionState<C>) {
        let _ = state;
    }

    /// Survivor and parent selection begins
    fn on_selection_started(&mut self, generation: usize) {
        let _ = generation;
    }

    /// Selection finished with these survivors and parents
    fn on_selection_ended(&mut self, survivors: &Population<C>, parents: &Population<C>) {
        let _ = (survivors, parents);
    }

    /// The alteration pipeline is about to run on the parents
    fn on_alteration_started(&mut self, generation: usize) {
        let _ = generation;
    }

    /// The alteration pipeline produced these offspring
    fn on_alteration_ended(&mut self, offspring: &Population<C>) {
        let _ = offspring;
    }
}

/// Listener that accumulates a full [`EvolutionRecord`] of the run.
///
/// The record lives behind an `Arc<Mutex<..>>` handle so it stays readable
/// after the recorder has been moved into the engine.
pub struct Recorder<C: Chromosome> {
    record: Arc<Mutex<EvolutionRecord<C>>>,
}

impl<C: Chromosome> Recorder<C> {
    /// Create a recorder with an empty record
    pub fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(EvolutionRecord::new())),
        }
    }

    /// A shared handle onto the record being built
    pub fn record(&self) -> Arc<Mutex<EvolutionRecord<C>>> {
        Arc::clone(&self.record)
    }

    fn with_record(&self, f: impl FnOnce(&mut EvolutionRecord<C>)) {
        // a poisoned mutex means a listener panicked; keep recording anyway
        match self.record.lock() {
            Ok(mut record) => f(&mut record),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl<C: Chromosome> Default for Recorder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chromosome> EvolutionListener<C> for Recorder<C> {
    fn on_initialization_started(&mut self) {
        self.with_record(|record| record.initialization.start());
    }

    fn on_initialization_ended(&mut self, _state: &EvolutionState<C>) {
        self.with_record(|record| record.initialization.stop());
    }

    fn on_generation_ended(&mut self, _state: &EvolutionState<C>, record: &GenerationRecord<C>) {
        let generation = record.clone();
        self.with_record(|full| full.generations.push(generation));
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{EvolutionListener, Recorder};
}
