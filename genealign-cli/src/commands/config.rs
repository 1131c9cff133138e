//! Config command implementation - print or write configuration files

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;

/// Emit either the built-in defaults (`example`) or the active configuration
pub fn execute(config: &Config, example: bool, output: Option<PathBuf>) -> Result<()> {
    let selected = if example { Config::default() } else { config.clone() };

    match output {
        Some(path) => {
            selected.save_to_file(&path)?;
            log::info!("Wrote configuration to {}", path.display());
        }
        None => {
            let content = if example {
                Config::example_toml()?
            } else {
                toml::to_string_pretty(&selected).context("Failed to serialize configuration")?
            };
            print!("{}", content);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_active_configuration() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("genealign.toml");

        let mut config = Config::default();
        config.band.half_band = 4;
        execute(&config, false, Some(path.clone()))?;

        let loaded = Config::load_from_file(&path)?;
        assert_eq!(loaded.band.half_band, 4);
        Ok(())
    }

    #[test]
    fn test_example_ignores_active_configuration() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("example.toml");

        let mut config = Config::default();
        config.scoring.indel_penalty = 9;
        execute(&config, true, Some(path.clone()))?;

        assert_eq!(Config::load_from_file(&path)?, Config::default());
        Ok(())
    }
}
