//! FASTA/FASTQ sequence file parser
//!
//! Parsing is delegated to needletail. Gzipped inputs (`.gz`) are decoded with
//! flate2 before parsing.

use anyhow::Result;
use flate2::read::GzDecoder;
use needletail::{parse_fastx_file, parse_fastx_reader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty file or no sequences found")]
    EmptyFile,
}

/// A sequence record with its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequence {
    pub id: String,
    pub description: Option<String>,
    pub seq: Vec<u8>,
}

impl NamedSequence {
    pub fn new<S: Into<String>>(id: S, seq: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            description: None,
            seq,
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// FASTA/FASTQ parser for reading sequence data
pub struct FastaParser;

impl FastaParser {
    /// Parse a FASTA/FASTQ file, gzipped or not
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<NamedSequence>> {
        let path_str = path.as_ref().to_string_lossy();

        if path_str.ends_with(".gz") {
            let file = File::open(&path).map_err(FastaError::from)?;
            Self::parse_reader(BufReader::new(GzDecoder::new(file)))
        } else {
            let mut reader =
                parse_fastx_file(&path).map_err(|e| FastaError::Parse(e.to_string()))?;
            let mut sequences = Vec::new();
            while let Some(record) = reader.next() {
                let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
                sequences.push(Self::record_to_sequence(&record));
            }
            Self::non_empty(sequences)
        }
    }

    /// Parse FASTA/FASTQ data from any readable source
    pub fn parse_reader<R: std::io::Read + Send>(reader: R) -> Result<Vec<NamedSequence>> {
        let mut fastx_reader =
            parse_fastx_reader(reader).map_err(|e| FastaError::Parse(e.to_string()))?;
        let mut sequences = Vec::new();

        while let Some(record) = fastx_reader.next() {
            let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
            sequences.push(Self::record_to_sequence(&record));
        }

        Self::non_empty(sequences)
    }

    fn non_empty(sequences: Vec<NamedSequence>) -> Result<Vec<NamedSequence>> {
        if sequences.is_empty() {
            Err(FastaError::EmptyFile.into())
        } else {
            log::debug!("Parsed {} sequence records", sequences.len());
            Ok(sequences)
        }
    }

    /// Split the header into id and description
    fn record_to_sequence(record: &needletail::parser::SequenceRecord) -> NamedSequence {
        let header = String::from_utf8_lossy(record.id()).into_owned();
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) if !rest.trim().is_empty() => {
                (id.to_string(), Some(rest.trim().to_string()))
            }
            Some((id, _)) => (id.to_string(), None),
            None => (header, None),
        };

        NamedSequence {
            id,
            description,
            seq: record.seq().into_owned(),
        }
    }
}
