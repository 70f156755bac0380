//! Configuration system for the placer.
//!
//! Load solver settings from TOML or YAML files to control how many
//! placements are kept and how progress is reported, without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use placer_config::PlacerConfig;
//!
//! let config = PlacerConfig::from_toml_str(r#"
//!     best_option_count = 3
//!     count_before_solve = false
//! "#).unwrap();
//!
//! assert_eq!(config.best_option_count, 3);
//! assert!(!config.count_before_solve);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use placer_config::PlacerConfig;
//!
//! let config = PlacerConfig::load("placer.toml").unwrap_or_default();
//! assert_eq!(config.best_option_count, 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default number of combinations between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

fn default_best_option_count() -> usize {
    1
}

fn default_count_before_solve() -> bool {
    true
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

/// Main placer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlacerConfig {
    /// How many of the best placements to keep (K, at least 1).
    #[serde(default = "default_best_option_count")]
    pub best_option_count: usize,

    /// Whether to walk the search space once without scoring to report its size.
    #[serde(default = "default_count_before_solve")]
    pub count_before_solve: bool,

    /// Combinations between progress log lines; 0 disables progress logging.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            best_option_count: default_best_option_count(),
            count_before_solve: default_count_before_solve(),
            progress_interval: default_progress_interval(),
        }
    }
}

impl PlacerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets how many of the best placements to keep.
    pub fn with_best_option_count(mut self, count: usize) -> Self {
        self.best_option_count = count;
        self
    }

    /// Enables or disables the counting pass before solving.
    pub fn with_count_before_solve(mut self, enabled: bool) -> Self {
        self.count_before_solve = enabled;
        self
    }

    /// Sets the progress logging interval.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.best_option_count == 0 {
            return Err(ConfigError::Invalid(
                "best_option_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
