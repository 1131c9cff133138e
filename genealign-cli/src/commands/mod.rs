//! Command implementations for the GeneAlign CLI

pub mod align;
pub mod config;
pub mod output;
pub mod pairwise;

use crate::config::Config;
use crate::error::{CliError, CliResult};
use genealign_core::{AlignMode, AlignmentReport, AlignmentStats, SequenceAligner, Symbol};

/// Report plus column statistics for one aligned pair
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    pub report: AlignmentReport,
    pub stats: Option<AlignmentStats>,
}

/// Command line value if given, configuration value otherwise
pub fn resolve_max_length(config: &Config, cli_value: Option<usize>) -> CliResult<usize> {
    let max_length = cli_value.unwrap_or(config.report.max_length);
    if max_length == 0 {
        return Err(CliError::validation("max length must be positive"));
    }
    Ok(max_length)
}

/// Aligner for the configured settings, checked against inputs of up to
/// `max_length` symbols each
pub fn build_aligner(config: &Config, max_length: usize) -> CliResult<SequenceAligner> {
    let aligner_config = config.aligner_config();
    aligner_config
        .scoring
        .check_range(max_length.saturating_mul(2))
        .map_err(|e| CliError::validation(e.to_string()))?;
    SequenceAligner::new(aligner_config).map_err(|e| CliError::validation(e.to_string()))
}

/// Align one pair, keeping the statistics of the full alignment
pub fn run_alignment<S: Symbol>(
    aligner: &SequenceAligner,
    seq1: &[S],
    seq2: &[S],
    mode: AlignMode,
    max_length: usize,
) -> AlignmentOutcome {
    match aligner.align_full(seq1, seq2, mode, max_length) {
        Ok(alignment) => AlignmentOutcome {
            report: AlignmentReport::from_alignment(&alignment, aligner.config().display_length),
            stats: Some(alignment.stats()),
        },
        Err(err) => {
            log::debug!("{}", err);
            AlignmentOutcome {
                report: AlignmentReport::unaligned(),
                stats: None,
            }
        }
    }
}
