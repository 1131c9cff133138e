//! Configuration handling for the GeneAlign CLI
//!
//! Supports loading configuration from genealign.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use genealign_core::scoring::{
    DEFAULT_INDEL_PENALTY, DEFAULT_MATCH_REWARD, DEFAULT_SUBSTITUTION_PENALTY,
};
use genealign_core::{AlignerConfig, ScoringScheme, DEFAULT_DISPLAY_LENGTH, DEFAULT_HALF_BAND};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "genealign.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub band: BandConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Cost of aligning two equal symbols (negative values reward matches)
    #[serde(default = "default_match_reward")]
    pub match_reward: i32,

    /// Cost of aligning two different symbols
    #[serde(default = "default_substitution_penalty")]
    pub substitution_penalty: i32,

    /// Cost of each insertion or deletion
    #[serde(default = "default_indel_penalty")]
    pub indel_penalty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    /// Positions allowed on each side of the diagonal in banded mode
    #[serde(default = "default_half_band")]
    pub half_band: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Symbols considered from each input sequence
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Aligned columns printed per sequence
    #[serde(default = "default_display_length")]
    pub display_length: usize,
}

// Default value functions
fn default_match_reward() -> i32 { DEFAULT_MATCH_REWARD }
fn default_substitution_penalty() -> i32 { DEFAULT_SUBSTITUTION_PENALTY }
fn default_indel_penalty() -> i32 { DEFAULT_INDEL_PENALTY }
fn default_half_band() -> usize { DEFAULT_HALF_BAND }
fn default_max_length() -> usize { 1000 }
fn default_display_length() -> usize { DEFAULT_DISPLAY_LENGTH }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_reward: default_match_reward(),
            substitution_penalty: default_substitution_penalty(),
            indel_penalty: default_indel_penalty(),
        }
    }
}

impl Default for BandConfig {
    fn default() -> Self {
        Self { half_band: default_half_band() }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            display_length: default_display_length(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize default configuration")
    }

    /// Settings handed to the alignment engine
    pub fn aligner_config(&self) -> AlignerConfig {
        AlignerConfig {
            scoring: ScoringScheme::new(
                self.scoring.match_reward,
                self.scoring.substitution_penalty,
                self.scoring.indel_penalty,
            ),
            half_band: self.band.half_band,
            display_length: self.report.display_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scoring.match_reward, -3);
        assert_eq!(config.scoring.indel_penalty, 5);
        assert_eq!(config.band.half_band, 3);
        assert_eq!(config.report.display_length, 100);
        assert_eq!(config.aligner_config(), AlignerConfig::default());
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.scoring.indel_penalty = 2;
        config.band.half_band = 5;

        let temp_file = NamedTempFile::new()?;
        config.save_to_file(temp_file.path())?;
        let loaded_config = Config::load_from_file(temp_file.path())?;

        assert_eq!(config, loaded_config);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[scoring]\nindel_penalty = 7\n").unwrap();
        assert_eq!(config.scoring.indel_penalty, 7);
        assert_eq!(config.scoring.match_reward, -3);
        assert_eq!(config.band.half_band, 3);
        assert_eq!(config.report.max_length, 1000);
    }

    #[test]
    fn test_example_toml_generation() {
        let example = Config::example_toml().unwrap();
        assert!(example.contains("[scoring]"));
        assert!(example.contains("[band]"));
        assert!(example.contains("[report]"));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/genealign.toml"))).is_err());
    }
}
