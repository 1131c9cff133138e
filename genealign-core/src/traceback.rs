//! Recurrence tie-break and path reconstruction shared by both strategies
//!
//! Both strategies store one [`Direction`] per populated cell. The traceback
//! only ever sees true (row, column) coordinates through [`PathGrid`], so the
//! banded strategy's shifting window never leaks into gap placement.

use crate::error::{AlignError, AlignResult};
use crate::types::{AlignOp, Symbol};

/// Provenance of a dynamic-programming cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The origin cell (0, 0)
    Start,
    /// Consumed one symbol of each sequence
    Diagonal,
    /// Consumed a symbol of sequence 2 only
    Left,
    /// Consumed a symbol of sequence 1 only
    Top,
}

impl Direction {
    /// Cell this direction points back to, or `None` for `Start` and for
    /// moves that would leave the matrix.
    #[inline]
    pub fn predecessor(self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Start => None,
            Direction::Diagonal => Some((row.checked_sub(1)?, col.checked_sub(1)?)),
            Direction::Left => Some((row, col.checked_sub(1)?)),
            Direction::Top => Some((row.checked_sub(1)?, col)),
        }
    }
}

/// Choose the cheapest move into a cell.
///
/// Candidates are `None` when the neighbor is unreachable. LEFT is the
/// starting candidate; TOP and then DIAGONAL replace the current best only on
/// strict improvement, so ties resolve LEFT, then TOP, then DIAGONAL.
#[inline]
pub fn best_step(
    left: Option<i32>,
    top: Option<i32>,
    diagonal: Option<i32>,
) -> Option<(i32, Direction)> {
    let mut best = left.map(|cost| (cost, Direction::Left));

    let challengers = [
        top.map(|cost| (cost, Direction::Top)),
        diagonal.map(|cost| (cost, Direction::Diagonal)),
    ];
    for (cost, dir) in challengers.into_iter().flatten() {
        if best.map_or(true, |(best_cost, _)| cost < best_cost) {
            best = Some((cost, dir));
        }
    }

    best
}

/// Read access to a filled path matrix in true coordinates
pub trait PathGrid {
    /// Direction stored at (`row`, `col`), or `None` if the cell was never
    /// populated.
    fn direction(&self, row: usize, col: usize) -> Option<Direction>;
}

/// Aligned columns reconstructed from a path matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracebackPath<S> {
    pub aligned1: Vec<S>,
    pub aligned2: Vec<S>,
    pub ops: Vec<AlignOp>,
}

impl<S: Symbol> TracebackPath<S> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            aligned1: Vec::with_capacity(capacity),
            aligned2: Vec::with_capacity(capacity),
            ops: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, a: S, b: S, op: AlignOp) {
        self.aligned1.push(a);
        self.aligned2.push(b);
        self.ops.push(op);
    }

    fn reverse(&mut self) {
        self.aligned1.reverse();
        self.aligned2.reverse();
        self.ops.reverse();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Walking { row: usize, col: usize },
    Done,
}

/// Walk the path matrix from (`end_row`, `end_col`) back to the origin.
///
/// Every step strictly decreases `row + col`, so the walk ends after at most
/// `end_row + end_col` steps whatever the matrix holds. A cell without a
/// predecessor fails the whole walk; no partial path is returned.
pub fn traceback<G: PathGrid, S: Symbol>(
    grid: &G,
    seq1: &[S],
    seq2: &[S],
    end_row: usize,
    end_col: usize,
) -> AlignResult<TracebackPath<S>> {
    let mut path = TracebackPath::with_capacity(end_row + end_col);
    let mut state = Walk::Walking { row: end_row, col: end_col };

    while let Walk::Walking { row, col } = state {
        if row == 0 && col == 0 {
            state = Walk::Done;
            continue;
        }

        let broken = AlignError::BrokenTraceback { row, col };
        let (dir, (prev_row, prev_col)) = grid
            .direction(row, col)
            .and_then(|dir| dir.predecessor(row, col).map(|prev| (dir, prev)))
            .ok_or(broken.clone())?;

        match dir {
            Direction::Diagonal => {
                let (a, b) = (seq1[prev_row], seq2[prev_col]);
                let op = if a == b { AlignOp::Match } else { AlignOp::Substitution };
                path.push(a, b, op);
            }
            Direction::Left => path.push(S::GAP, seq2[prev_col], AlignOp::Insertion),
            Direction::Top => path.push(seq1[prev_row], S::GAP, AlignOp::Deletion),
            // Start never has a predecessor
            Direction::Start => return Err(broken),
        }
        state = Walk::Walking { row: prev_row, col: prev_col };
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_step_prefers_left_on_ties() {
        assert_eq!(best_step(Some(2), Some(2), Some(2)), Some((2, Direction::Left)));
        assert_eq!(best_step(Some(3), Some(2), Some(2)), Some((2, Direction::Top)));
        assert_eq!(best_step(Some(3), Some(3), Some(2)), Some((2, Direction::Diagonal)));
        assert_eq!(best_step(Some(1), Some(3), Some(1)), Some((1, Direction::Left)));
    }

    #[test]
    fn test_best_step_skips_unreachable() {
        assert_eq!(best_step(None, Some(4), Some(9)), Some((4, Direction::Top)));
        assert_eq!(best_step(None, None, Some(9)), Some((9, Direction::Diagonal)));
        assert_eq!(best_step(Some(5), None, None), Some((5, Direction::Left)));
        assert_eq!(best_step(None, None, None), None);
    }

    #[test]
    fn test_predecessor() {
        assert_eq!(Direction::Diagonal.predecessor(2, 3), Some((1, 2)));
        assert_eq!(Direction::Left.predecessor(2, 3), Some((2, 2)));
        assert_eq!(Direction::Top.predecessor(2, 3), Some((1, 3)));
        assert_eq!(Direction::Start.predecessor(0, 0), None);
        assert_eq!(Direction::Left.predecessor(4, 0), None);
        assert_eq!(Direction::Top.predecessor(0, 4), None);
    }

    /// Hand-built grid: every cell on the diagonal, then a single LEFT at the end.
    struct DiagonalThenLeft;

    impl PathGrid for DiagonalThenLeft {
        fn direction(&self, row: usize, col: usize) -> Option<Direction> {
            match (row, col) {
                (0, 0) => Some(Direction::Start),
                (r, c) if c == r + 1 => Some(Direction::Left),
                (r, c) if r == c => Some(Direction::Diagonal),
                _ => None,
            }
        }
    }

    #[test]
    fn test_traceback_places_gap() {
        let path = traceback(&DiagonalThenLeft, b"AC", b"AGT", 2, 3).unwrap();
        assert_eq!(path.aligned1, b"AC-");
        assert_eq!(path.aligned2, b"AGT");
        assert_eq!(
            path.ops,
            vec![AlignOp::Match, AlignOp::Substitution, AlignOp::Insertion]
        );
    }

    #[test]
    fn test_traceback_from_origin_is_empty() {
        let path = traceback::<_, u8>(&DiagonalThenLeft, b"", b"", 0, 0).unwrap();
        assert!(path.ops.is_empty());
        assert!(path.aligned1.is_empty());
    }

    #[test]
    fn test_traceback_fails_on_missing_predecessor() {
        // (2, 0) is not on the hand-built path
        let result = traceback(&DiagonalThenLeft, b"AC", b"AGT", 2, 0);
        assert_eq!(result, Err(AlignError::BrokenTraceback { row: 2, col: 0 }));

        // A stray start marker away from the origin
        struct StrayStart;
        impl PathGrid for StrayStart {
            fn direction(&self, _row: usize, _col: usize) -> Option<Direction> {
                Some(Direction::Start)
            }
        }
        let result = traceback(&StrayStart, b"A", b"A", 1, 1);
        assert_eq!(result, Err(AlignError::BrokenTraceback { row: 1, col: 1 }));
    }

    #[test]
    fn test_traceback_over_chars() {
        let seq1: Vec<char> = "ÉC".chars().collect();
        let seq2: Vec<char> = "ÉGT".chars().collect();
        let path = traceback(&DiagonalThenLeft, &seq1, &seq2, 2, 3).unwrap();
        assert_eq!(path.aligned1, vec!['É', 'C', '-']);
        assert_eq!(path.aligned2, seq2);
    }
}
