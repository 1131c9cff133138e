//! Banded alignment over an (n+1)×(2k+1) matrix
//!
//! Row `r` stores the window of true columns starting at `max(r - k, 0)`.
//! For the first `k + 1` rows the window is pinned to column 0; after that it
//! slides right by one column per row. [`Band`] owns that mapping and is the
//! only place band-relative and true columns are converted, for the fill and
//! for the traceback alike.

use crate::aligner::Aligner;
use crate::error::{AlignError, AlignResult};
use crate::matrix::DpMatrix;
use crate::scoring::ScoringScheme;
use crate::traceback::{best_step, traceback, Direction, PathGrid};
use crate::types::{Alignment, Symbol};

/// Half-band used when none is configured
pub const DEFAULT_HALF_BAND: usize = 3;

/// Largest half-band accepted by [`crate::AlignerConfig::validate`]
pub const MAX_HALF_BAND: usize = 4096;

/// Band geometry for one pair of sequence lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    half_band: usize,
    rows: usize,
    max_col: usize,
}

impl Band {
    /// Band for aligning `len1` symbols (rows) against `len2` symbols (columns).
    ///
    /// A half-band of at least `max(len1, len2)` already covers the whole
    /// matrix, so larger values are clamped to that.
    pub fn new(half_band: usize, len1: usize, len2: usize) -> Self {
        Self {
            half_band: half_band.min(len1.max(len2)),
            rows: len1 + 1,
            max_col: len2,
        }
    }

    /// Number of band columns, `2k + 1`
    pub fn width(&self) -> usize {
        2 * self.half_band + 1
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// First true column covered by `row`
    #[inline]
    pub fn window_start(&self, row: usize) -> usize {
        row.saturating_sub(self.half_band)
    }

    /// True column of band cell (`row`, `band_col`)
    #[inline]
    pub fn true_column(&self, row: usize, band_col: usize) -> usize {
        self.window_start(row) + band_col
    }

    /// Band column holding true cell (`row`, `col`), if it lies in the band
    #[inline]
    pub fn band_column(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col > self.max_col {
            return None;
        }
        let band_col = col.checked_sub(self.window_start(row))?;
        (band_col < self.width()).then_some(band_col)
    }
}

/// Filled banded score and path matrices; `None` marks out-of-band cells
#[derive(Debug, Clone)]
pub struct BandedMatrices {
    pub band: Band,
    pub scores: DpMatrix<Option<i32>>,
    pub paths: DpMatrix<Option<Direction>>,
}

impl BandedMatrices {
    /// Score at true cell (`row`, `col`); `None` is the +∞ of out-of-band cells
    #[inline]
    pub fn score(&self, row: usize, col: usize) -> Option<i32> {
        self.band
            .band_column(row, col)
            .and_then(|band_col| self.scores.get(row, band_col))
    }

    /// Last populated cell of the final row, as (true column, cost)
    pub fn terminal(&self) -> Option<(usize, i32)> {
        let last_row = self.band.rows() - 1;
        let band_col = self.scores.row(last_row).iter().rposition(Option::is_some)?;
        let cost = self.scores.get(last_row, band_col)?;
        Some((self.band.true_column(last_row, band_col), cost))
    }
}

impl PathGrid for BandedMatrices {
    fn direction(&self, row: usize, col: usize) -> Option<Direction> {
        self.band
            .band_column(row, col)
            .and_then(|band_col| self.paths.get(row, band_col))
    }
}

/// Edit-distance alignment restricted to a diagonal band, Θ(n·k)
#[derive(Debug, Clone, Copy)]
pub struct BandedAligner {
    scoring: ScoringScheme,
    half_band: usize,
}

impl Default for BandedAligner {
    fn default() -> Self {
        Self::new(ScoringScheme::default(), DEFAULT_HALF_BAND)
    }
}

impl BandedAligner {
    pub fn new(scoring: ScoringScheme, half_band: usize) -> Self {
        Self { scoring, half_band }
    }

    pub fn half_band(&self) -> usize {
        self.half_band
    }

    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    /// Populate the in-band cells row by row.
    ///
    /// Does not check the length precondition; with lengths further apart
    /// than the half-band the final row simply never reaches `seq2.len()`.
    /// Costs must fit in `i32`, see [`ScoringScheme::check_range`].
    pub fn fill<S: Symbol>(&self, seq1: &[S], seq2: &[S]) -> BandedMatrices {
        let band = Band::new(self.half_band, seq1.len(), seq2.len());
        let indel = self.scoring.indel_penalty;

        let mut matrices = BandedMatrices {
            band,
            scores: DpMatrix::new(band.rows(), band.width(), None),
            paths: DpMatrix::new(band.rows(), band.width(), None),
        };

        for row in 0..band.rows() {
            for band_col in 0..band.width() {
                let col = band.true_column(row, band_col);
                if col > seq2.len() {
                    break;
                }

                if row == 0 && col == 0 {
                    matrices.scores.set(0, 0, Some(0));
                    matrices.paths.set(0, 0, Some(Direction::Start));
                    continue;
                }

                // Out-of-band neighbors come back as None
                let left = col
                    .checked_sub(1)
                    .and_then(|c| matrices.score(row, c))
                    .map(|s| s + indel);
                let top = row
                    .checked_sub(1)
                    .and_then(|r| matrices.score(r, col))
                    .map(|s| s + indel);
                let diagonal = if row > 0 && col > 0 {
                    matrices
                        .score(row - 1, col - 1)
                        .map(|s| s + self.scoring.match_cost(seq1[row - 1], seq2[col - 1]))
                } else {
                    None
                };

                if let Some((cost, dir)) = best_step(left, top, diagonal) {
                    matrices.scores.set(row, band_col, Some(cost));
                    matrices.paths.set(row, band_col, Some(dir));
                }
            }
        }

        matrices
    }
}

impl<S: Symbol> Aligner<S> for BandedAligner {
    fn align(&self, seq1: &[S], seq2: &[S]) -> AlignResult<Alignment<S>> {
        let band_too_narrow = AlignError::BandTooNarrow {
            len1: seq1.len(),
            len2: seq2.len(),
            half_band: self.half_band,
        };

        if seq1.len().abs_diff(seq2.len()) > self.half_band {
            return Err(band_too_narrow);
        }
        self.scoring.check_range(seq1.len() + seq2.len())?;

        let matrices = self.fill(seq1, seq2);
        log::debug!(
            "Banded alignment: {}x{} band matrix (half-band {})",
            matrices.band.rows(),
            matrices.band.width(),
            self.half_band
        );

        let (end_col, cost) = match matrices.terminal() {
            Some((col, cost)) if col == seq2.len() => (col, cost),
            _ => return Err(band_too_narrow),
        };

        let path = traceback(&matrices, seq1, seq2, seq1.len(), end_col)?;

        Ok(Alignment {
            cost,
            aligned1: path.aligned1,
            aligned2: path.aligned2,
            ops: path.ops,
        })
    }

    fn name(&self) -> &'static str {
        "banded"
    }
}
