//! Pairwise command implementation - align every pair of sequences in a file

use anyhow::Result;
use genealign_core::{AlignMode, FastaParser};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::output::{write_record, PairRecord};
use super::{build_aligner, resolve_max_length, run_alignment};
use crate::config::Config;
use crate::error::CliError;
use crate::OutputFormat;

pub fn execute(
    config: &Config,
    fasta: PathBuf,
    banded: bool,
    max_length: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_pairs(config, &fasta, banded, max_length, format, &mut out)
}

/// Align every pair (i, j) with i < j in file order, one record per pair
pub fn write_pairs<W: Write>(
    config: &Config,
    fasta: &Path,
    banded: bool,
    max_length: Option<usize>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let max_length = resolve_max_length(config, max_length)?;
    let aligner = build_aligner(config, max_length)?;
    let mode = AlignMode::from(banded);

    if !fasta.exists() {
        return Err(CliError::file_not_found(fasta.to_path_buf()).into());
    }

    let sequences = FastaParser::parse_file(fasta)
        .map_err(|e| CliError::parse(fasta.display().to_string(), format!("{:#}", e)))?;

    if sequences.len() < 2 {
        return Err(CliError::validation(format!(
            "{} holds {} sequence, pairwise alignment needs at least two",
            fasta.display(),
            sequences.len()
        ))
        .into());
    }

    log::info!(
        "Loaded {} sequences from {}, aligning {} pairs ({} mode)",
        sequences.len(),
        fasta.display(),
        pair_count(sequences.len()),
        mode
    );

    let start_time = Instant::now();
    let mut rejected = 0usize;

    for (i, j) in pairs(sequences.len()) {
        let (first, second) = (&sequences[i], &sequences[j]);
        let outcome = run_alignment(&aligner, &first.seq, &second.seq, mode, max_length);
        if !outcome.report.is_aligned() {
            rejected += 1;
        }

        let record = PairRecord {
            seq1_id: &first.id,
            seq2_id: &second.id,
            mode,
            report: &outcome.report,
            stats: outcome.stats,
        };
        write_record(&mut *out, &record, format)?;
    }
    out.flush()?;

    log::info!(
        "Aligned {} pairs in {:.2}s",
        pair_count(sequences.len()),
        start_time.elapsed().as_secs_f64()
    );
    if rejected > 0 {
        log::warn!("{} pairs differ in length by more than the band allows", rejected);
    }

    Ok(())
}

/// Index pairs (i, j) with i < j, row by row
fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
