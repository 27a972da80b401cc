//! Generation and evolution records
//!
//! Records capture what happened — who the parents and offspring were, how
//! long each phase took — without coupling the engine to any reporting
//! backend. Counters are unsigned, so the non-negativity constraints on
//! `generation` and `steady` hold by construction.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::genetics::chromosome::Chromosome;
use crate::genetics::genotype::Genotype;
use crate::population::individual::Individual;

/// Timing of one phase: not started, started, or finished.
///
/// Accessors return an explicit error when read before the phase completed,
/// never an uninitialized-access panic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    #[serde(skip)]
    start_time: Option<Instant>,
    duration: Option<Duration>,
}

impl PhaseRecord {
    /// A record for a phase that has not started
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the phase as started now
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Mark the phase as finished, capturing its duration.
    ///
    /// A stop without a prior start leaves the record unfinished.
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.duration = Some(start.elapsed());
        }
    }

    /// True once the phase has started
    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }

    /// The moment the phase started
    pub fn started_at(&self) -> EvoResult<Instant> {
        self.start_time
            .ok_or(EvolutionError::TimingUnavailable("phase has not started"))
    }

    /// How long the phase took
    pub fn elapsed(&self) -> EvoResult<Duration> {
        self.duration
            .ok_or(EvolutionError::TimingUnavailable("phase has not finished"))
    }
}

/// Snapshot of one individual at a generation boundary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct IndividualRecord<C: Chromosome> {
    /// The individual's genotype
    pub genotype: Genotype<C>,
    /// Its fitness at record time (NaN if it was unevaluated)
    pub fitness: f64,
}

impl<C: Chromosome> IndividualRecord<C> {
    /// Record an individual as it stands
    pub fn of(individual: &Individual<C>) -> Self {
        Self {
            genotype: individual.genotype.clone(),
            fitness: individual.fitness.unwrap_or(f64::NAN),
        }
    }
}

/// Everything recorded about one generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GenerationRecord<C: Chromosome> {
    /// Generation counter
    pub generation: usize,
    /// Consecutive generations without improvement, as of this generation
    pub steady: usize,
    /// Wall-clock timing of the whole generation
    pub timing: PhaseRecord,
    /// The individuals selected as parents for recombination
    pub parents: Vec<IndividualRecord<C>>,
    /// The individuals the alteration pipeline produced
    pub offspring: Vec<IndividualRecord<C>>,
}

impl<C: Chromosome> GenerationRecord<C> {
    /// Start recording a generation
    pub fn new(generation: usize, steady: usize) -> Self {
        Self {
            generation,
            steady,
            timing: PhaseRecord::new(),
            parents: Vec::new(),
            offspring: Vec::new(),
        }
    }
}

/// Record of a whole evolution run: the initialization bootstrap plus one
/// record per generation, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EvolutionRecord<C: Chromosome> {
    /// Timing of the population bootstrap
    pub initialization: PhaseRecord,
    /// Per-generation records, oldest first
    pub generations: Vec<GenerationRecord<C>>,
}

impl<C: Chromosome> Default for EvolutionRecord<C> {
    fn default() -> Self {
        Self {
            initialization: PhaseRecord::default(),
            generations: Vec::new(),
        }
    }
}

impl<C: Chromosome> EvolutionRecord<C> {
    /// An empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded generations
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// True if no generation has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}
