//! Genetic data model: genes, chromosomes and genotypes

pub mod bools;
pub mod chars;
pub mod chromosome;
pub mod doubles;
pub mod gene;
pub mod genotype;
pub mod nothing;

pub use bools::{BoolChromosome, BoolGene};
pub use chars::{CharChromosome, CharGene};
pub use chromosome::Chromosome;
pub use doubles::{DoubleChromosome, DoubleGene};
pub use gene::{Gene, NumericGene};
pub use genotype::{Genotype, GenotypeFactory};
pub use nothing::{Nothing, NothingGene};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        BoolChromosome, BoolGene, CharChromosome, CharGene, Chromosome, DoubleChromosome,
        DoubleGene, Gene, Genotype, GenotypeFactory, Nothing, NothingGene, NumericGene,
    };
}
