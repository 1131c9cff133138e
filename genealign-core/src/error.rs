//! Error types for the alignment engine

use thiserror::Error;

/// Errors that can occur while aligning two sequences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// Banded mode was requested for sequences whose lengths differ by more
    /// than the half-band, so no in-band path reaches the terminal cell.
    #[error("Band too narrow: lengths {len1} and {len2} differ by more than {half_band}")]
    BandTooNarrow {
        len1: usize,
        len2: usize,
        half_band: usize,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The path matrix has no usable predecessor at a cell on the walk back
    #[error("Traceback broke off at cell ({row}, {col})")]
    BrokenTraceback { row: usize, col: usize },
}

impl AlignError {
    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        Self::InvalidParams(message.into())
    }
}

pub type AlignResult<T> = Result<T, AlignError>;
