//! Common entry point over the unrestricted and banded strategies

use crate::banded::{BandedAligner, DEFAULT_HALF_BAND, MAX_HALF_BAND};
use crate::error::{AlignError, AlignResult};
use crate::scoring::ScoringScheme;
use crate::types::{Alignment, AlignmentReport, Symbol, DEFAULT_DISPLAY_LENGTH};
use crate::unrestricted::UnrestrictedAligner;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pairwise alignment strategy over symbols of type `S`
pub trait Aligner<S: Symbol = u8> {
    /// Align the whole of `seq1` against the whole of `seq2`
    fn align(&self, seq1: &[S], seq2: &[S]) -> AlignResult<Alignment<S>>;
    fn name(&self) -> &'static str;
}

/// Which strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Unrestricted,
    Banded,
}

impl From<bool> for AlignMode {
    fn from(banded: bool) -> Self {
        if banded {
            AlignMode::Banded
        } else {
            AlignMode::Unrestricted
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignMode::Unrestricted => write!(f, "unrestricted"),
            AlignMode::Banded => write!(f, "banded"),
        }
    }
}

/// Immutable alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignerConfig {
    pub scoring: ScoringScheme,
    /// Positions allowed on each side of the diagonal in banded mode
    pub half_band: usize,
    /// Aligned columns kept in a report
    pub display_length: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringScheme::default(),
            half_band: DEFAULT_HALF_BAND,
            display_length: DEFAULT_DISPLAY_LENGTH,
        }
    }
}

impl AlignerConfig {
    pub fn validate(&self) -> AlignResult<()> {
        if self.display_length == 0 {
            return Err(AlignError::invalid_params("display length must be positive"));
        }
        if self.half_band > MAX_HALF_BAND {
            return Err(AlignError::invalid_params(format!(
                "half-band {} exceeds the maximum of {}",
                self.half_band, MAX_HALF_BAND
            )));
        }
        Ok(())
    }
}

/// Dispatches to one strategy per call and truncates inputs and outputs
#[derive(Debug, Clone)]
pub struct SequenceAligner {
    config: AlignerConfig,
    unrestricted: UnrestrictedAligner,
    banded: BandedAligner,
}

impl Default for SequenceAligner {
    fn default() -> Self {
        Self::from_valid(AlignerConfig::default())
    }
}

impl SequenceAligner {
    pub fn new(config: AlignerConfig) -> AlignResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: AlignerConfig) -> Self {
        Self {
            config,
            unrestricted: UnrestrictedAligner::new(config.scoring),
            banded: BandedAligner::new(config.scoring, config.half_band),
        }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn strategy<S: Symbol>(&self, mode: AlignMode) -> &dyn Aligner<S> {
        match mode {
            AlignMode::Unrestricted => &self.unrestricted,
            AlignMode::Banded => &self.banded,
        }
    }

    /// Align the first `max_length` symbols of each sequence, keeping the
    /// full aligned strings.
    pub fn align_full<S: Symbol>(
        &self,
        seq1: &[S],
        seq2: &[S],
        mode: AlignMode,
        max_length: usize,
    ) -> AlignResult<Alignment<S>> {
        let seq1 = &seq1[..seq1.len().min(max_length)];
        let seq2 = &seq2[..seq2.len().min(max_length)];
        self.strategy(mode).align(seq1, seq2)
    }

    /// Align and build the truncated report. A banded request whose lengths
    /// fall outside the band yields an infinite cost with empty strings.
    pub fn align_report<S: Symbol>(
        &self,
        seq1: &[S],
        seq2: &[S],
        mode: AlignMode,
        max_length: usize,
    ) -> AlignmentReport {
        match self.align_full(seq1, seq2, mode, max_length) {
            Ok(alignment) => AlignmentReport::from_alignment(&alignment, self.config.display_length),
            Err(err @ AlignError::BandTooNarrow { .. }) => {
                log::debug!("No {} alignment: {}", mode, err);
                AlignmentReport::unaligned()
            }
            Err(err) => {
                log::warn!("{} alignment failed: {}", mode, err);
                AlignmentReport::unaligned()
            }
        }
    }

    /// Align text character by character; `max_length` counts characters
    pub fn align(
        &self,
        sequence1: &str,
        sequence2: &str,
        banded: bool,
        max_length: usize,
    ) -> AlignmentReport {
        let seq1: Vec<char> = sequence1.chars().take(max_length).collect();
        let seq2: Vec<char> = sequence2.chars().take(max_length).collect();
        self.align_report(&seq1, &seq2, AlignMode::from(banded), max_length)
    }
}

/// Align two sequences with the default scoring, half-band and display length
pub fn align(sequence1: &str, sequence2: &str, banded: bool, max_length: usize) -> AlignmentReport {
    SequenceAligner::default().align(sequence1, sequence2, banded, max_length)
}
