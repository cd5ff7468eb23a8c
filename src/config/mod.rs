//! Configuration management for the rank registry
//!
//! This module handles loading and validating the initial rank set, the initial
//! player assignments and logging settings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RankError, Result};
use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV: &str = "RANK_MANAGER_LOG_LEVEL";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Initial ranks; must include the default rank
    #[serde(default)]
    pub ranks: Vec<RankConfig>,
    /// Initial player -> rank id assignments
    #[serde(default)]
    pub players: BTreeMap<String, i32>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let mut config = Self::from_yaml_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        config.validate().map_err(RankError::validation)?;
        Ok(config)
    }

    /// Apply overrides from the environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(LOG_LEVEL_ENV) {
            match value.parse::<LogLevel>() {
                Ok(level) => self.logging.level = level,
                Err(e) => warn!("Ignoring {}: {}", LOG_LEVEL_ENV, e),
            }
        }
    }
}
