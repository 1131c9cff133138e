//! Text and JSON rendering of alignment reports

use anyhow::{Context, Result};
use genealign_core::{AlignMode, AlignmentReport, AlignmentStats};
use serde::Serialize;
use std::io::Write;

use crate::OutputFormat;

/// One line of output: a report tagged with the sequences it came from
#[derive(Debug, Serialize)]
pub struct PairRecord<'a> {
    pub seq1_id: &'a str,
    pub seq2_id: &'a str,
    pub mode: AlignMode,
    #[serde(flatten)]
    pub report: &'a AlignmentReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<AlignmentStats>,
}

pub fn write_record<W: Write>(out: &mut W, record: &PairRecord<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record).context("Failed to serialize report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(out, record)?,
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, record: &PairRecord<'_>) -> std::io::Result<()> {
    writeln!(out, "{} vs {} ({})", record.seq1_id, record.seq2_id, record.mode)?;

    if !record.report.is_aligned() {
        writeln!(out, "  cost:     inf (lengths differ by more than the band allows)")?;
        return Ok(());
    }

    writeln!(out, "  cost:     {}", record.report.align_cost)?;
    if let Some(stats) = record.stats {
        writeln!(
            out,
            "  identity: {:.1}% ({} matches, {} substitutions, {} insertions, {} deletions)",
            stats.identity(),
            stats.matches,
            stats.substitutions,
            stats.insertions,
            stats.deletions
        )?;
    }
    writeln!(out, "  seq1:     {}", record.report.seqi_first100)?;
    writeln!(out, "  seq2:     {}", record.report.seqj_first100)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genealign_core::Cost;

    fn record(report: &AlignmentReport) -> PairRecord<'_> {
        PairRecord {
            seq1_id: "a",
            seq2_id: "b",
            mode: AlignMode::Banded,
            report,
            stats: None,
        }
    }

    #[test]
    fn test_json_line() {
        let report = AlignmentReport {
            align_cost: Cost::Finite(-8),
            seqi_first100: "AATT".to_string(),
            seqj_first100: "AGTT".to_string(),
        };
        let mut buffer = Vec::new();
        write_record(&mut buffer, &record(&report), OutputFormat::Json).unwrap();

        let line = String::from_utf8(buffer).unwrap();
        assert_eq!(
            line,
            "{\"seq1_id\":\"a\",\"seq2_id\":\"b\",\"mode\":\"banded\",\"align_cost\":-8,\
             \"seqi_first100\":\"AATT\",\"seqj_first100\":\"AGTT\"}\n"
        );
    }

    #[test]
    fn test_text_for_rejected_pair() {
        let report = AlignmentReport::unaligned();
        let mut buffer = Vec::new();
        write_record(&mut buffer, &record(&report), OutputFormat::Text).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("a vs b (banded)\n"));
        assert!(text.contains("cost:     inf"));
        assert!(!text.contains("seq1:"));
    }
}
