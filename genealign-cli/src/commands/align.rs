//! Align command implementation - align two literal sequences

use anyhow::Result;
use genealign_core::AlignMode;
use std::time::Instant;

use super::output::{write_record, PairRecord};
use super::{build_aligner, resolve_max_length, run_alignment};
use crate::config::Config;
use crate::OutputFormat;

pub fn execute(
    config: &Config,
    seq1: &str,
    seq2: &str,
    banded: bool,
    max_length: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let max_length = resolve_max_length(config, max_length)?;
    let aligner = build_aligner(config, max_length)?;
    let mode = AlignMode::from(banded);

    // Literal arguments are text, so align whole characters
    let seq1: Vec<char> = seq1.chars().collect();
    let seq2: Vec<char> = seq2.chars().collect();

    log::info!(
        "Aligning {} vs {} symbols ({} mode, max length {})",
        seq1.len(),
        seq2.len(),
        mode,
        max_length
    );

    let start_time = Instant::now();
    let outcome = run_alignment(&aligner, &seq1, &seq2, mode, max_length);
    log::info!("Alignment completed in {:.3}s", start_time.elapsed().as_secs_f64());

    let record = PairRecord {
        seq1_id: "seq1",
        seq2_id: "seq2",
        mode,
        report: &outcome.report,
        stats: outcome.stats,
    };

    let stdout = std::io::stdout();
    write_record(&mut stdout.lock(), &record, format)
}
