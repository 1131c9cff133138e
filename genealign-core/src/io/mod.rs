//! Sequence input for GeneAlign
//!
//! The alignment engine itself never touches files; these loaders feed it.

pub mod fasta;

pub use fasta::{FastaError, FastaParser, NamedSequence};
