//! Engine configuration and construction
//!
//! The builder collects components and parameters, applies defaults for
//! everything left unset, and validates the whole configuration in one pass
//! at `build` time so an error report names every violation at once.

use crate::engine::evolver::Evolver;
use crate::error::{ConstraintCheck, EvoResult};
use crate::fitness::FitnessFunction;
use crate::genetics::chromosome::Chromosome;
use crate::genetics::genotype::GenotypeFactory;
use crate::limits::Limit;
use crate::listeners::EvolutionListener;
use crate::operators::selection::TournamentSelector;
use crate::operators::traits::{Alterer, Selector};
use crate::ranking::Ranker;

/// Default number of individuals per generation
pub const DEFAULT_POPULATION_SIZE: usize = 50;
/// Default fraction of each generation kept as survivors
pub const DEFAULT_SURVIVAL_RATE: f64 = 0.4;

/// Builder for an [`Evolver`].
///
/// Components not supplied fall back to defaults: tournament selection for
/// both survivors and parents, a maximizing ranker, population size
/// [`DEFAULT_POPULATION_SIZE`] and survival rate [`DEFAULT_SURVIVAL_RATE`].
/// Alterers and limits have no default; at least one of each is required.
pub struct EvolverBuilder<C: Chromosome> {
    population_size: usize,
    survival_rate: f64,
    ranker: Ranker,
    survivor_selector: Box<dyn Selector<C>>,
    parent_selector: Box<dyn Selector<C>>,
    alterers: Vec<Box<dyn Alterer<C>>>,
    limits: Vec<Box<dyn Limit<C>>>,
    listeners: Vec<Box<dyn EvolutionListener<C>>>,
}

impl<C: Chromosome> Default for EvolverBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chromosome> EvolverBuilder<C> {
    /// Start from the defaults
    pub fn new() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            survival_rate: DEFAULT_SURVIVAL_RATE,
            ranker: Ranker::maximize(),
            survivor_selector: Box::new(TournamentSelector::default()),
            parent_selector: Box::new(TournamentSelector::default()),
            alterers: Vec::new(),
            limits: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Number of individuals per generation
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Fraction of each generation carried over as survivors, in `[0, 1]`
    pub fn survival_rate(mut self, rate: f64) -> Self {
        self.survival_rate = rate;
        self
    }

    /// The ranker the engine optimizes under
    pub fn ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Selector that picks survivors out of the ranked generation
    pub fn survivor_selector(mut self, selector: impl Selector<C> + 'static) -> Self {
        self.survivor_selector = Box::new(selector);
        self
    }

    /// Selector that picks the parents of the next offspring
    pub fn parent_selector(mut self, selector: impl Selector<C> + 'static) -> Self {
        self.parent_selector = Box::new(selector);
        self
    }

    /// Append an alterer stage; stages run in registration order
    pub fn alterer(mut self, alterer: impl Alterer<C> + 'static) -> Self {
        self.alterers.push(Box::new(alterer));
        self
    }

    /// Append a termination criterion; all installed limits must hold
    pub fn limit(mut self, limit: impl Limit<C> + 'static) -> Self {
        self.limits.push(Box::new(limit));
        self
    }

    /// Append a listener; hooks fire in registration order
    pub fn listener(mut self, listener: impl EvolutionListener<C> + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Validate the configuration and build the engine.
    ///
    /// Every violated constraint is reported, not just the first one found.
    pub fn build(
        self,
        factory: impl GenotypeFactory<C> + 'static,
        fitness: impl FitnessFunction<C> + Send + 'static,
    ) -> EvoResult<Evolver<C>> {
        let mut check = ConstraintCheck::new();
        check.require(self.population_size > 0, "population size must be positive");
        check.require(
            self.survival_rate.is_finite() && (0.0..=1.0).contains(&self.survival_rate),
            "survival rate must be a finite number in [0, 1]",
        );
        check.require(!self.alterers.is_empty(), "at least one alterer is required");
        check.require(
            !self.limits.is_empty(),
            "at least one limit is required; an unlimited run never terminates",
        );
        check.finish()?;

        Ok(Evolver::from_parts(
            self.population_size,
            self.survival_rate,
            self.ranker,
            Box::new(factory),
            Box::new(fitness),
            self.survivor_selector,
            self.parent_selector,
            self.alterers,
            self.limits,
            self.listeners,
        ))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::error::EvolutionError;
    use crate::genetics::doubles::DoubleChromosome;
    use crate::genetics::genotype::Genotype;
    use crate::limits::MaxGenerations;
    use crate::operators::mutation::Mutator;

    fn factory(rng: &mut dyn RngCore) -> Genotype<DoubleChromosome> {
        Genotype::new(vec![DoubleChromosome::random(3, 0.0..1.0, rng)])
    }

    fn fitness(genotype: &Genotype<DoubleChromosome>) -> f64 {
        genotype.flatten().iter().sum()
    }

    #[test]
    fn test_build_with_defaults() {
        let evolver = EvolverBuilder::new()
            .alterer(Mutator::new(0.1))
            .limit(MaxGenerations::new(10).unwrap())
            .build(factory, fitness);
        assert!(evolver.is_ok());
    }

    #[test]
    fn test_build_reports_all_violations_at_once() {
        let err = EvolverBuilder::<DoubleChromosome>::new()
            .population_size(0)
            .survival_rate(1.5)
            .build(factory, fitness)
            .unwrap_err();

        let EvolutionError::Constraint(violations) = err else {
            panic!("expected a constraint error, got {err:?}");
        };
        let message = violations.to_string();
        assert!(message.contains("population size"));
        assert!(message.contains("survival rate"));
        assert!(message.contains("alterer"));
        assert!(message.contains("limit"));
    }

    #[test]
    fn test_build_rejects_nan_survival_rate() {
        let err = EvolverBuilder::new()
            .survival_rate(f64::NAN)
            .alterer(Mutator::new(0.1))
            .limit(MaxGenerations::new(1).unwrap())
            .build(factory, fitness)
            .unwrap_err();
        assert!(err.to_string().contains("survival rate"));
    }
}
