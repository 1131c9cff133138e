//! Unrestricted alignment over the full (n+1)×(m+1) matrix

use crate::aligner::Aligner;
use crate::error::AlignResult;
use crate::matrix::DpMatrix;
use crate::scoring::ScoringScheme;
use crate::traceback::{best_step, traceback, Direction, PathGrid};
use crate::types::{Alignment, Symbol};

/// Classic global edit-distance alignment, Θ(n·m) time and space
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrestrictedAligner {
    scoring: ScoringScheme,
}

/// Filled score and path matrices
#[derive(Debug, Clone)]
pub struct FullMatrices {
    pub scores: DpMatrix<i32>,
    pub paths: DpMatrix<Direction>,
}

impl FullMatrices {
    /// Cost at the bottom-right corner
    pub fn final_cost(&self) -> i32 {
        self.scores.get(self.scores.rows() - 1, self.scores.cols() - 1)
    }
}

impl PathGrid for FullMatrices {
    fn direction(&self, row: usize, col: usize) -> Option<Direction> {
        (row < self.paths.rows() && col < self.paths.cols()).then(|| self.paths.get(row, col))
    }
}

impl UnrestrictedAligner {
    pub fn new(scoring: ScoringScheme) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    /// Populate both matrices row by row.
    ///
    /// Costs must fit in `i32`; [`Aligner::align`] checks this with
    /// [`ScoringScheme::check_range`] before filling.
    pub fn fill<S: Symbol>(&self, seq1: &[S], seq2: &[S]) -> FullMatrices {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let indel = self.scoring.indel_penalty;

        let mut scores = DpMatrix::new(rows, cols, 0i32);
        let mut paths = DpMatrix::new(rows, cols, Direction::Start);

        // First row: all insertions
        for col in 1..cols {
            scores.set(0, col, self.scoring.gap_cost(col));
            paths.set(0, col, Direction::Left);
        }

        // First column: all deletions
        for row in 1..rows {
            scores.set(row, 0, self.scoring.gap_cost(row));
            paths.set(row, 0, Direction::Top);
        }

        for row in 1..rows {
            for col in 1..cols {
                let left = scores.get(row, col - 1) + indel;
                let top = scores.get(row - 1, col) + indel;
                let diagonal = scores.get(row - 1, col - 1)
                    + self.scoring.match_cost(seq1[row - 1], seq2[col - 1]);

                // All three neighbors exist in the full matrix
                if let Some((cost, dir)) = best_step(Some(left), Some(top), Some(diagonal)) {
                    scores.set(row, col, cost);
                    paths.set(row, col, dir);
                }
            }
        }

        FullMatrices { scores, paths }
    }
}

impl<S: Symbol> Aligner<S> for UnrestrictedAligner {
    fn align(&self, seq1: &[S], seq2: &[S]) -> AlignResult<Alignment<S>> {
        self.scoring.check_range(seq1.len() + seq2.len())?;

        log::debug!(
            "Unrestricted alignment: {}x{} matrix",
            seq1.len() + 1,
            seq2.len() + 1
        );

        let matrices = self.fill(seq1, seq2);
        let path = traceback(&matrices, seq1, seq2, seq1.len(), seq2.len())?;

        Ok(Alignment {
            cost: matrices.final_cost(),
            aligned1: path.aligned1,
            aligned2: path.aligned2,
            ops: path.ops,
        })
    }

    fn name(&self) -> &'static str {
        "unrestricted"
    }
}
