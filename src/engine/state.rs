//! Evolution state snapshots

use serde::{Deserialize, Serialize};

use crate::genetics::chromosome::Chromosome;
use crate::population::population::Population;
use crate::ranking::Ranker;

/// Immutable snapshot of one generation, consumed by limits and listeners.
///
/// `generation` starts at 0 for the initial population and increases by
/// exactly one per loop iteration. `steady` counts consecutive generations
/// without a strict improvement of the best-seen fitness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EvolutionState<C: Chromosome> {
    /// Generation counter, 0 for the freshly initialized population
    pub generation: usize,
    /// Consecutive generations without fitness improvement
    pub steady: usize,
    /// Best fitness seen so far across all generations, if any
    pub best_fitness: Option<f64>,
    /// The ranker the engine is evolving under
    pub ranker: Ranker,
    /// The generation's population
    pub population: Population<C>,
}

impl<C: Chromosome> EvolutionState<C> {
    /// Snapshot a freshly initialized population at generation 0
    pub fn initial(population: Population<C>, ranker: Ranker) -> Self {
        Self {
            generation: 0,
            steady: 0,
            best_fitness: None,
            ranker,
            population,
        }
    }

    /// The best individual of this generation under the active ranker
    pub fn best_individual(&self) -> Option<&crate::population::individual::Individual<C>> {
        self.ranker.best_of(&self.population)
    }
}
