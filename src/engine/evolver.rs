//! The evolution engine
//!
//! `Evolver::run` drives the full loop: initialize, then per generation
//! rank, select survivors and parents, alter the parents into offspring,
//! reassemble a fixed-size population, evaluate, and check limits. Every
//! phase boundary is reported to the installed listeners.

use rand::RngCore;

use crate::engine::records::{GenerationRecord, IndividualRecord};
use crate::engine::state::EvolutionState;
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::FitnessFunction;
use crate::genetics::chromosome::Chromosome;
use crate::genetics::genotype::GenotypeFactory;
use crate::limits::{all_hold, Limit};
use crate::listeners::EvolutionListener;
use crate::operators::traits::{Alterer, Selector};
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::ranking::Ranker;

/// Where the engine currently is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Built but not yet started
    Created,
    /// Creating and evaluating the initial population
    Initializing,
    /// Computing fitness for unevaluated individuals
    Evaluating,
    /// Picking survivors and parents
    Selecting,
    /// Running the alterer pipeline over the parents
    Altering,
    /// Assembling the next generation from survivors and offspring
    Replacing,
    /// The run finished; `run` may not be called again
    Terminated,
}

/// Result of a finished run: the best individual ever seen plus the final
/// generation's state.
#[derive(Clone, Debug)]
pub struct EvolutionOutcome<C: Chromosome> {
    /// Best individual across all generations, evaluated
    pub best: Individual<C>,
    /// State of the last generation before termination
    pub state: EvolutionState<C>,
}

/// The evolution engine.
///
/// Holds its components as trait objects so one engine type covers every
/// combination of selectors, alterers, limits and listeners. Construct it
/// through [`EvolverBuilder`](crate::engine::config::EvolverBuilder); all
/// randomness flows through the `rng` handed to [`Evolver::run`].
pub struct Evolver<C: Chromosome> {
    population_size: usize,
    survival_rate: f64,
    ranker: Ranker,
    factory: Box<dyn GenotypeFactory<C>>,
    fitness: Box<dyn FitnessFunction<C> + Send>,
    survivor_selector: Box<dyn Selector<C>>,
    parent_selector: Box<dyn Selector<C>>,
    alterers: Vec<Box<dyn Alterer<C>>>,
    limits: Vec<Box<dyn Limit<C>>>,
    listeners: Vec<Box<dyn EvolutionListener<C>>>,
    phase: Phase,
}

impl<C: Chromosome> std::fmt::Debug for Evolver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evolver")
            .field("population_size", &self.population_size)
            .field("survival_rate", &self.survival_rate)
            .field("ranker", &self.ranker)
            .field("alterers", &self.alterers.len())
            .field("limits", &self.limits.len())
            .field("listeners", &self.listeners.len())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<C: Chromosome> Evolver<C> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        population_size: usize,
        survival_rate: f64,
        ranker: Ranker,
        factory: Box<dyn GenotypeFactory<C>>,
        fitness: Box<dyn FitnessFunction<C> + Send>,
        survivor_selector: Box<dyn Selector<C>>,
        parent_selector: Box<dyn Selector<C>>,
        alterers: Vec<Box<dyn Alterer<C>>>,
        limits: Vec<Box<dyn Limit<C>>>,
        listeners: Vec<Box<dyn EvolutionListener<C>>>,
    ) -> Self {
        Self {
            population_size,
            survival_rate,
            ranker,
            factory,
            fitness,
            survivor_selector,
            parent_selector,
            alterers,
            limits,
            listeners,
            phase: Phase::Created,
        }
    }

    /// The engine's current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The ranker this engine optimizes under
    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// Number of survivors carried into each next generation
    fn survivor_count(&self) -> usize {
        // floor; the remainder of the population is filled by offspring
        (self.survival_rate * self.population_size as f64) as usize
    }

    fn notify(&mut self, mut hook: impl FnMut(&mut dyn EvolutionListener<C>)) {
        for listener in &mut self.listeners {
            hook(listener.as_mut());
        }
    }

    /// Run the evolution to termination.
    ///
    /// One engine runs once: a second call is an error, not a silent restart.
    pub fn run(&mut self, rng: &mut dyn RngCore) -> EvoResult<EvolutionOutcome<C>> {
        if self.phase != Phase::Created {
            return Err(EvolutionError::InvalidOperation(
                "engine has already run; build a fresh one to evolve again",
            ));
        }

        // -- initialization --
        self.phase = Phase::Initializing;
        self.notify(|l| l.on_initialization_started());

        let mut population: Population<C> = (0..self.population_size)
            .map(|_| Individual::new(self.factory.create(rng)))
            .collect();

        self.phase = Phase::Evaluating;
        self.notify(|l| l.on_evaluation_started(0));
        population.evaluate_with(&*self.fitness);

        let mut state = EvolutionState::initial(population, self.ranker);
        state.best_fitness = self.ranker.best_fitness(&state.population);
        let mut best = self
            .ranker
            .best_of(&state.population)
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation)?;

        self.notify(|l| l.on_evaluation_ended(&state));
        self.notify(|l| l.on_initialization_ended(&state));

        // -- generation loop --
        while all_hold(&self.limits, &state) {
            let generation = state.generation + 1;
            let mut record = GenerationRecord::new(generation, state.steady);
            record.timing.start();
            self.notify(|l| l.on_generation_started(&state));

            // selection
            self.phase = Phase::Selecting;
            self.notify(|l| l.on_selection_started(generation));
            let survivor_count = self.survivor_count();
            let offspring_count = self.population_size - survivor_count;

            let ranked = self.ranker.sort(&state.population);
            let survivors =
                self.survivor_selector
                    .select(&ranked, survivor_count, &self.ranker, rng)?;
            let parents = self
                .parent_selector
                .select(&ranked, offspring_count, &self.ranker, rng)?;
            record.parents = parents.iter().map(IndividualRecord::of).collect();
            self.notify(|l| l.on_selection_ended(&survivors, &parents));

            // alteration
            self.phase = Phase::Altering;
            self.notify(|l| l.on_alteration_started(generation));
            let mut offspring = parents;
            for alterer in &self.alterers {
                offspring = alterer.alter(offspring, rng)?;
            }
            record.offspring = offspring.iter().map(IndividualRecord::of).collect();
            self.notify(|l| l.on_alteration_ended(&offspring));

            // replacement: survivors first, offspring after, exactly N total
            self.phase = Phase::Replacing;
            let mut next = survivors;
            next.extend(offspring);
            next.truncate(self.population_size);
            while next.len() < self.population_size {
                next.push(best.clone());
            }

            // evaluation
            self.phase = Phase::Evaluating;
            self.notify(|l| l.on_evaluation_started(generation));
            next.evaluate_with(&*self.fitness);

            let generation_best = self.ranker.best_fitness(&next);
            let improved = match (generation_best, state.best_fitness) {
                (Some(new), Some(old)) => self.ranker.is_improvement(new, old),
                (Some(_), None) => true,
                (None, _) => false,
            };

            state = EvolutionState {
                generation,
                steady: if improved { 0 } else { state.steady + 1 },
                best_fitness: if improved { generation_best } else { state.best_fitness },
                ranker: self.ranker,
                population: next,
            };
            if improved {
                if let Some(individual) = self.ranker.best_of(&state.population) {
                    best = individual.clone();
                }
            }

            self.notify(|l| l.on_evaluation_ended(&state));
            record.timing.stop();
            self.notify(|l| l.on_generation_ended(&state, &record));
        }

        self.phase = Phase::Terminated;
        Ok(EvolutionOutcome { best, state })
    }
}
