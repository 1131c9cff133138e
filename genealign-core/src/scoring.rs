//! Scoring policy shared by both alignment strategies
//!
//! Alignment is phrased as cost minimization: a match *lowers* the running
//! cost, while substitutions and indels raise it.

use crate::error::{AlignError, AlignResult};
use serde::{Deserialize, Serialize};

/// Default reward for two equal symbols
pub const DEFAULT_MATCH_REWARD: i32 = -3;
/// Default penalty for two different symbols
pub const DEFAULT_SUBSTITUTION_PENALTY: i32 = 1;
/// Default penalty for an insertion or deletion
pub const DEFAULT_INDEL_PENALTY: i32 = 5;

/// Linear-gap scoring scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// Cost contributed by aligning two equal symbols (negative rewards)
    pub match_reward: i32,
    /// Cost contributed by aligning two different symbols
    pub substitution_penalty: i32,
    /// Cost contributed by each gap position
    pub indel_penalty: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_reward: DEFAULT_MATCH_REWARD,
            substitution_penalty: DEFAULT_SUBSTITUTION_PENALTY,
            indel_penalty: DEFAULT_INDEL_PENALTY,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_reward: i32, substitution_penalty: i32, indel_penalty: i32) -> Self {
        Self {
            match_reward,
            substitution_penalty,
            indel_penalty,
        }
    }

    /// Cost of aligning symbol `a` against symbol `b`
    #[inline]
    pub fn match_cost<S: PartialEq>(&self, a: S, b: S) -> i32 {
        if a == b {
            self.match_reward
        } else {
            self.substitution_penalty
        }
    }

    /// Cost of a run of `len` gap positions, saturating at the `i32` range
    #[inline]
    pub fn gap_cost(&self, len: usize) -> i32 {
        let len = i32::try_from(len).unwrap_or(i32::MAX);
        self.indel_penalty.saturating_mul(len)
    }

    /// Largest cost magnitude a single aligned column can contribute
    pub fn max_step(&self) -> u64 {
        [self.match_reward, self.substitution_penalty, self.indel_penalty]
            .iter()
            .map(|value| u64::from(value.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }

    /// Check that no path of up to `columns` aligned columns can leave the
    /// `i32` range. Every cell and every candidate of the recurrence is such
    /// a path, so a passing check rules out overflow in the fill.
    pub fn check_range(&self, columns: usize) -> AlignResult<()> {
        let worst = u64::try_from(columns)
            .ok()
            .and_then(|columns| self.max_step().checked_mul(columns));

        match worst {
            Some(worst) if worst <= i32::MAX as u64 => Ok(()),
            _ => Err(AlignError::invalid_params(format!(
                "costs up to {} per column overflow over {} columns",
                self.max_step(),
                columns
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        let scoring = ScoringScheme::default();
        assert_eq!(scoring.match_reward, -3);
        assert_eq!(scoring.substitution_penalty, 1);
        assert_eq!(scoring.indel_penalty, 5);
    }

    #[test]
    fn test_match_cost() {
        let scoring = ScoringScheme::default();
        assert_eq!(scoring.match_cost(b'A', b'A'), -3);
        assert_eq!(scoring.match_cost(b'A', b'G'), 1);
        // Symbols are opaque, case matters
        assert_eq!(scoring.match_cost(b'a', b'A'), 1);
    }

    #[test]
    fn test_gap_cost() {
        let scoring = ScoringScheme::new(0, 1, 2);
        assert_eq!(scoring.gap_cost(0), 0);
        assert_eq!(scoring.gap_cost(4), 8);
        assert_eq!(ScoringScheme::new(0, 0, 2_000_000_000).gap_cost(2), i32::MAX);
    }

    #[test]
    fn test_check_range() {
        let scoring = ScoringScheme::default();
        assert_eq!(scoring.max_step(), 5);
        assert!(scoring.check_range(2000).is_ok());
        assert!(scoring.check_range(usize::MAX).is_err());

        let huge_indel = ScoringScheme::new(-3, 1, 2_000_000_000);
        assert!(huge_indel.check_range(1).is_ok());
        assert!(matches!(
            huge_indel.check_range(2),
            Err(AlignError::InvalidParams(_))
        ));

        let min_reward = ScoringScheme::new(i32::MIN, 1, 1);
        assert_eq!(min_reward.max_step(), 1 << 31);
        assert!(min_reward.check_range(1).is_err());
    }
}
