use crate::scoring::ScoringScheme;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Gap marker inserted into aligned sequences
pub const GAP: u8 = b'-';

/// Number of aligned columns kept when reporting
pub const DEFAULT_DISPLAY_LENGTH: usize = 100;

/// A sequence element the strategies can align.
///
/// Bytes cover FASTA input; `char` keeps multi-byte text whole.
pub trait Symbol: Copy + Eq + fmt::Debug {
    /// Gap marker of this symbol type
    const GAP: Self;

    /// Render aligned symbols as text
    fn render(symbols: &[Self]) -> String;
}

impl Symbol for u8 {
    const GAP: u8 = GAP;

    fn render(symbols: &[u8]) -> String {
        String::from_utf8_lossy(symbols).into_owned()
    }
}

impl Symbol for char {
    const GAP: char = '-';

    fn render(symbols: &[char]) -> String {
        symbols.iter().collect()
    }
}

/// Alignment cost, where `Infinite` means no valid alignment exists
/// under the band constraint.
///
/// `Finite` orders before `Infinite`, so `Cost` compares the way a
/// minimization expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    Finite(i32),
    Infinite,
}

impl Cost {
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            Cost::Finite(v) => Some(*v),
            Cost::Infinite => None,
        }
    }
}

impl From<i32> for Cost {
    fn from(value: i32) -> Self {
        Cost::Finite(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{}", v),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cost::Finite(v) => serializer.serialize_i32(*v),
            Cost::Infinite => serializer.serialize_str("inf"),
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCost {
            Finite(i32),
            Text(String),
        }

        match RawCost::deserialize(deserializer)? {
            RawCost::Finite(v) => Ok(Cost::Finite(v)),
            RawCost::Text(text) if text.eq_ignore_ascii_case("inf") => Ok(Cost::Infinite),
            RawCost::Text(text) => Err(D::Error::custom(format!("invalid cost: {}", text))),
        }
    }
}

/// One column of a pairwise alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignOp {
    /// Equal symbols from both sequences
    Match,
    /// Different symbols from both sequences
    Substitution,
    /// Symbol from sequence 2 only, gap in aligned sequence 1
    Insertion,
    /// Symbol from sequence 1 only, gap in aligned sequence 2
    Deletion,
}

/// Full, untruncated result of a successful alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<S = u8> {
    pub cost: i32,
    pub aligned1: Vec<S>,
    pub aligned2: Vec<S>,
    /// Columns in left-to-right order
    pub ops: Vec<AlignOp>,
}

impl<S: Symbol> Alignment<S> {
    /// Number of aligned columns
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn aligned1_str(&self) -> String {
        S::render(&self.aligned1)
    }

    pub fn aligned2_str(&self) -> String {
        S::render(&self.aligned2)
    }

    /// Recompute the path cost column by column under `scoring`
    pub fn rescore(&self, scoring: &ScoringScheme) -> i32 {
        self.ops
            .iter()
            .map(|op| match op {
                AlignOp::Match => scoring.match_reward,
                AlignOp::Substitution => scoring.substitution_penalty,
                AlignOp::Insertion | AlignOp::Deletion => scoring.indel_penalty,
            })
            .sum()
    }

    pub fn stats(&self) -> AlignmentStats {
        let mut stats = AlignmentStats::default();
        for op in &self.ops {
            match op {
                AlignOp::Match => stats.matches += 1,
                AlignOp::Substitution => stats.substitutions += 1,
                AlignOp::Insertion => stats.insertions += 1,
                AlignOp::Deletion => stats.deletions += 1,
            }
        }
        stats
    }
}

/// Column counts of an alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub matches: u32,
    pub substitutions: u32,
    pub insertions: u32,
    pub deletions: u32,
}

impl AlignmentStats {
    pub fn alignment_length(&self) -> u32 {
        self.matches + self.substitutions + self.insertions + self.deletions
    }

    pub fn edit_distance(&self) -> u32 {
        self.substitutions + self.insertions + self.deletions
    }

    /// Identity percentage (0.0 to 100.0)
    pub fn identity(&self) -> f32 {
        let total = self.alignment_length();
        if total == 0 {
            return 0.0;
        }
        (self.matches as f32 / total as f32) * 100.0
    }
}

/// Alignment as handed to presentation layers: the cost plus the first
/// `display_length` columns of each aligned sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub align_cost: Cost,
    pub seqi_first100: String,
    pub seqj_first100: String,
}

impl AlignmentReport {
    /// Keeps the first `display_length` symbols of each aligned sequence
    pub fn from_alignment<S: Symbol>(alignment: &Alignment<S>, display_length: usize) -> Self {
        let keep1 = alignment.aligned1.len().min(display_length);
        let keep2 = alignment.aligned2.len().min(display_length);
        Self {
            align_cost: Cost::Finite(alignment.cost),
            seqi_first100: S::render(&alignment.aligned1[..keep1]),
            seqj_first100: S::render(&alignment.aligned2[..keep2]),
        }
    }

    /// Sentinel report for "no valid alignment within the band"
    pub fn unaligned() -> Self {
        Self {
            align_cost: Cost::Infinite,
            seqi_first100: String::new(),
            seqj_first100: String::new(),
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.align_cost.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_alignment() -> Alignment {
        Alignment {
            cost: 4,
            aligned1: b"AA--".to_vec(),
            aligned2: b"AAAA".to_vec(),
            ops: vec![AlignOp::Match, AlignOp::Match, AlignOp::Insertion, AlignOp::Insertion],
        }
    }

    #[test]
    fn test_cost_ordering() {
        assert!(Cost::Finite(-100) < Cost::Finite(3));
        assert!(Cost::Finite(i32::MAX) < Cost::Infinite);
        assert_eq!(Cost::Finite(7).value(), Some(7));
        assert_eq!(Cost::Infinite.value(), None);
    }

    #[test]
    fn test_cost_json() {
        assert_eq!(serde_json::to_string(&Cost::Finite(-8)).unwrap(), "-8");
        assert_eq!(serde_json::to_string(&Cost::Infinite).unwrap(), "\"inf\"");
        assert_eq!(serde_json::from_str::<Cost>("\"inf\"").unwrap(), Cost::Infinite);
        assert_eq!(serde_json::from_str::<Cost>("12").unwrap(), Cost::Finite(12));
        assert!(serde_json::from_str::<Cost>("\"nan\"").is_err());
    }

    #[test]
    fn test_stats_and_rescore() {
        let alignment = sample_alignment();
        let stats = alignment.stats();
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.edit_distance(), 2);
        assert!((stats.identity() - 50.0).abs() < f32::EPSILON);
        assert_eq!(alignment.rescore(&ScoringScheme::default()), 4);
    }

    #[test]
    fn test_report_truncation() {
        let alignment = Alignment {
            cost: -3 * 150,
            aligned1: vec![b'A'; 150],
            aligned2: vec![b'A'; 150],
            ops: vec![AlignOp::Match; 150],
        };
        let report = AlignmentReport::from_alignment(&alignment, DEFAULT_DISPLAY_LENGTH);
        assert_eq!(report.seqi_first100.len(), 100);
        assert_eq!(report.seqj_first100.len(), 100);
        assert_eq!(report.align_cost, Cost::Finite(-450));
    }

    #[test]
    fn test_report_keeps_whole_characters() {
        let alignment = Alignment {
            cost: -3,
            aligned1: vec!['É', 'ß', '-'],
            aligned2: vec!['É', 'ß', 'x'],
            ops: vec![AlignOp::Match, AlignOp::Match, AlignOp::Insertion],
        };
        let report = AlignmentReport::from_alignment(&alignment, 2);
        assert_eq!(report.seqi_first100, "Éß");
        assert_eq!(report.seqj_first100, "Éß");
        assert_eq!(alignment.aligned1_str(), "Éß-");
    }

    #[test]
    fn test_unaligned_report() {
        let report = AlignmentReport::unaligned();
        assert!(!report.is_aligned());
        assert!(report.seqi_first100.is_empty());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"align_cost":"inf","seqi_first100":"","seqj_first100":""}"#);
    }
}
