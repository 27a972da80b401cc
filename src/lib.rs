//! # gentide
//!
//! An Evolutionary Computation Engine for Rust.
//!
//! This library evolves populations of candidate solutions under a
//! caller-supplied fitness function, with pluggable selection, alteration
//! and termination strategies.
//!
//! ## Core Concepts
//!
//! - **Layered Genetic Model**: Genes compose into chromosomes, chromosomes into genotypes,
//!   genotypes with a cached fitness into individuals
//! - **Explicit Ordering**: A [`Ranker`](ranking::Ranker) turns raw fitness into a NaN-safe
//!   total order under maximize or minimize semantics
//! - **Observable Runs**: Listeners see every phase boundary; records capture parents,
//!   offspring and timing per generation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gentide::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let outcome = EvolverBuilder::new()
//!     .population_size(100)
//!     .alterer(SinglePointCrossover::new(0.9))
//!     .alterer(Mutator::new(0.05))
//!     .limit(MaxGenerations::new(500)?)
//!     .build(
//!         |rng: &mut dyn rand::RngCore| {
//!             Genotype::new(vec![DoubleChromosome::random(10, -5.0..5.0, rng)])
//!         },
//!         |genotype: &Genotype<DoubleChromosome>| genotype.flatten().iter().sum(),
//!     )?
//!     .run(&mut rng)?;
//! ```

pub mod engine;
pub mod error;
pub mod fitness;
pub mod genetics;
pub mod limits;
pub mod listeners;
pub mod operators;
pub mod population;
pub mod ranking;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genetics::prelude::*;
    pub use crate::limits::prelude::*;
    pub use crate::listeners::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::ranking::prelude::*;
}
