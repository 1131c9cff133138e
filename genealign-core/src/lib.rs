//! GeneAlign Core Library
//!
//! Minimum-cost global alignment of two sequences with a linear gap model,
//! either over the full dynamic-programming matrix or restricted to a narrow
//! band around the main diagonal.
//!
//! ```
//! use genealign_core::{align, Cost};
//!
//! let report = align("AATT", "AGTT", false, 4);
//! assert_eq!(report.align_cost, Cost::Finite(-8));
//! assert_eq!(report.seqi_first100, "AATT");
//! ```

pub mod aligner;
pub mod banded;
pub mod error;
pub mod io;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod types;
pub mod unrestricted;

// Re-export commonly used types and functions
pub use aligner::{align, AlignMode, Aligner, AlignerConfig, SequenceAligner};
pub use banded::{Band, BandedAligner, DEFAULT_HALF_BAND, MAX_HALF_BAND};
pub use error::{AlignError, AlignResult};
pub use io::{FastaParser, NamedSequence};
pub use scoring::ScoringScheme;
pub use types::{
    AlignOp, Alignment, AlignmentReport, AlignmentStats, Cost, Symbol, DEFAULT_DISPLAY_LENGTH, GAP,
};
pub use unrestricted::UnrestrictedAligner;

/// Version information for the GeneAlign core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
