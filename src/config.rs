//! Embedding configuration.
//!
//! Type-safe configuration for the circular embedding: ring geometry
//! (modulus, wrap-around), the reserved realities multiplicity, rng seeding,
//! and the path-completion retry bound. Configurations load from YAML and
//! validate before use.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid modulus {0}: must be a finite value greater than zero")]
    InvalidModulus(f64),
    #[error("Invalid realities {0}: must be at least 1")]
    InvalidRealities(u32),
    #[error("Invalid max_placement_failures {0}: must be at least 1")]
    InvalidPlacementBound(u32),
}

/// Configuration for one circular embedding run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddingConfig {
    /// Reserved multiplicity parameter; must be >= 1, currently unused by
    /// the algorithm.
    #[serde(default = "default_realities")]
    pub realities: u32,

    /// Ring circumference; all positions fall in `[0, modulus)`.
    #[serde(default = "default_modulus")]
    pub modulus: f64,

    /// Whether distances and the final arc wrap at the modulus boundary.
    #[serde(default = "default_wrap_around")]
    pub wrap_around: bool,

    /// Base rng seed. When absent every run draws a fresh entropy seed and
    /// is not reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Consecutive path-completion failures tolerated before the run fails
    /// with a placement deadlock.
    #[serde(default = "default_max_placement_failures")]
    pub max_placement_failures: u32,
}

fn default_realities() -> u32 {
    1
}

fn default_modulus() -> f64 {
    1.0
}

fn default_wrap_around() -> bool {
    true
}

fn default_max_placement_failures() -> u32 {
    50
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            realities: default_realities(),
            modulus: default_modulus(),
            wrap_around: default_wrap_around(),
            seed: None,
            max_placement_failures: default_max_placement_failures(),
        }
    }
}

impl EmbeddingConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.modulus.is_finite() || self.modulus <= 0.0 {
            return Err(ConfigError::InvalidModulus(self.modulus));
        }
        if self.realities < 1 {
            return Err(ConfigError::InvalidRealities(self.realities));
        }
        if self.max_placement_failures < 1 {
            return Err(ConfigError::InvalidPlacementBound(
                self.max_placement_failures,
            ));
        }
        Ok(())
    }
}

/// Load and validate an embedding configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> color_eyre::eyre::Result<EmbeddingConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file '{}'", path.display()))?;
    let config: EmbeddingConfig = serde_yaml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse config file '{}'", path.display()))?;
    config
        .validate()
        .wrap_err_with(|| format!("Invalid configuration in '{}'", path.display()))?;
    Ok(config)
}
