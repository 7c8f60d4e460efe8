//! Configuration System
//!
//! Loads run parameters from a TOML file. Every section is optional and falls
//! back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tau_events::Isoform;
use thiserror::Error;

use crate::rules::TruncationRule;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "tau_sim.toml";

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub protein: ProteinConfig,
    #[serde(default)]
    pub truncation: TruncationRule,
}

/// Population and run length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of proteins
    pub population_size: usize,
    /// Number of rounds
    pub step_count: u64,
    /// Fixed seed; drawn from OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            step_count: 10,
            seed: None,
        }
    }
}

/// Initial protein attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProteinConfig {
    pub isoform: Isoform,
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from `path` if given, otherwise from the default path when it
    /// exists, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.population_size == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "population_size must be positive".to_string(),
            ));
        }
        if self.simulation.step_count == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "step_count must be positive".to_string(),
            ));
        }
        let p = self.truncation.probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidConfiguration(format!(
                "truncation probability must be within [0, 1], got {}",
                p
            )));
        }
        Ok(())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
