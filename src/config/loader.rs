//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::MonthWeightTable;
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, MonthWeightsConfig, PolicyConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── policy.yaml         # Policy metadata and period length limit
/// └── month_weights.yaml  # Points per vacation day for each month
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_points::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("August is worth {} points per day", loader.weights().weight(8).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The month weight table is incomplete or has a zero weight (`InvalidMonthWeights`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        if policy.max_period_days < 1 {
            return Err(EngineError::ConfigParseError {
                path: path.join("policy.yaml").display().to_string(),
                message: format!(
                    "max_period_days must be at least 1, got {}",
                    policy.max_period_days
                ),
            });
        }

        let weights_config =
            Self::load_yaml::<MonthWeightsConfig>(&path.join("month_weights.yaml"))?;
        let weights = MonthWeightTable::from_map(&weights_config.weights)?;

        info!(
            path = %path.display(),
            policy = %policy.name,
            version = %policy.version,
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(policy, weights),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the month weight table.
    pub fn weights(&self) -> &MonthWeightTable {
        self.config.weights()
    }

    /// Returns the longest vacation period accepted at the input boundary.
    pub fn max_period_days(&self) -> i64 {
        self.config.policy().max_period_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "vacation_points_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().name, "Seasonal vacation points");
        assert_eq!(loader.max_period_days(), 365);
    }

    #[test]
    fn test_loaded_weights_match_default_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.weights(), MonthWeightTable::default());
    }

    #[test]
    fn test_default_loader_uses_built_in_table() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.weights().weight(7).unwrap(), 11);
        assert_eq!(loader.max_period_days(), 365);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_incomplete_weights_returns_error() {
        let dir = scratch_dir("incomplete");
        fs::write(dir.join("policy.yaml"), "name: Test\nversion: \"1\"\n").unwrap();
        fs::write(dir.join("month_weights.yaml"), "weights:\n  1: 11\n  2: 11\n").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::InvalidMonthWeights { message }) => {
                assert!(message.contains("month 3"));
            }
            other => panic!("Expected InvalidMonthWeights, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("policy.yaml"), "name: [unterminated\n").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_non_positive_period_limit() {
        let dir = scratch_dir("limit");
        fs::write(
            dir.join("policy.yaml"),
            "name: Test\nversion: \"1\"\nmax_period_days: 0\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_policy_defaults_max_period_days() {
        let policy: PolicyConfig = serde_yaml::from_str("name: Test\nversion: \"2\"\n").unwrap();
        assert_eq!(policy.max_period_days, 365);
        assert!(policy.description.is_empty());
    }
}
