use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "genealign")]
#[command(about = "GeneAlign - unrestricted and banded sequence alignment")]
#[command(version)]
#[command(long_about = "
GeneAlign computes minimum-cost global alignments between sequences, either over
the full dynamic-programming matrix or within a narrow band around the diagonal.

Examples:
  genealign align --seq1 AATT --seq2 AGTT
  genealign align --seq1 ACGT --seq2 ACG --banded --format json
  genealign pairwise --fasta genes.fa --max-length 3000 --banded
  genealign config --example --output genealign.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences given on the command line
    Align {
        /// First sequence (rows of the matrix)
        #[arg(long)]
        seq1: String,

        /// Second sequence (columns of the matrix)
        #[arg(long)]
        seq2: String,

        /// Restrict the search to a band around the diagonal
        #[arg(long)]
        banded: bool,

        /// Symbols considered from each sequence (defaults to the config value)
        #[arg(long)]
        max_length: Option<usize>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Align every pair of sequences in a FASTA/FASTQ file
    Pairwise {
        /// Input sequence file (FASTA/FASTQ, optionally .gz)
        #[arg(long)]
        fasta: PathBuf,

        /// Restrict the search to a band around the diagonal
        #[arg(long)]
        banded: bool,

        /// Symbols considered from each sequence (defaults to the config value)
        #[arg(long)]
        max_length: Option<usize>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print or write an example configuration file
    Config {
        /// Print the built-in default configuration
        #[arg(long)]
        example: bool,

        /// Write the configuration to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    match cli.command {
        Commands::Align { seq1, seq2, banded, max_length, format } => {
            commands::align::execute(&config, &seq1, &seq2, banded, max_length, format)?;
        }

        Commands::Pairwise { fasta, banded, max_length, format } => {
            commands::pairwise::execute(&config, fasta, banded, max_length, format)?;
        }

        Commands::Config { example, output } => {
            commands::config::execute(&config, example, output)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            print_error_and_exit(cli_err);
        }
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_align_command() {
        let cli = Cli::parse_from([
            "genealign", "align", "--seq1", "ACGT", "--seq2", "ACG", "--banded", "--format", "json",
        ]);
        match cli.command {
            Commands::Align { seq1, seq2, banded, max_length, format } => {
                assert_eq!(seq1, "ACGT");
                assert_eq!(seq2, "ACG");
                assert!(banded);
                assert_eq!(max_length, None);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected align command"),
        }
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["genealign", "-vv", "config", "--example"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
