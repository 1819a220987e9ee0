//! Dashboard configuration file.
//!
//! A single optional YAML file controls the generated batch and table
//! defaults:
//!
//! ```yaml
//! record_count: 17000
//! seed: 12345
//! page_size: 20
//! ```
//!
//! A missing file or missing keys fall back to the defaults, so a fresh
//! checkout runs with no configuration at all.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::generator::{DEFAULT_RECORD_COUNT, DEFAULT_SEED};

/// Tunable defaults for the dashboard's data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of records in a generated batch.
    pub record_count: usize,
    /// Generation seed; refreshing the dashboard bumps it.
    pub seed: u64,
    /// Customer table page size.
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
            page_size: 20,
        }
    }
}

impl DashboardConfig {
    /// Read the config file, or fall back to defaults when it is absent.
    pub fn load_or_default(path: &Path) -> Result<DashboardConfig> {
        if !path.exists() {
            debug!(
                "No config file at {}, using defaults",
                path.display()
            );
            return Ok(DashboardConfig::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config back out as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.record_count, 17_000);
        assert_eq!(config.seed, 12_345);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.yaml");

        let config = DashboardConfig {
            record_count: 2700,
            seed: 42,
            page_size: 50,
        };
        config.save(&path).unwrap();

        let loaded = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.yaml");
        fs::write(&path, "seed: 7\n").unwrap();

        let loaded = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded.seed, 7);
        assert_eq!(loaded.record_count, 17_000);
        assert_eq!(loaded.page_size, 20);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.yaml");
        fs::write(&path, "record_count: [not a number\n").unwrap();
        assert!(DashboardConfig::load_or_default(&path).is_err());
    }
}
