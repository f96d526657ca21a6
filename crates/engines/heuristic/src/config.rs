//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while reading a [`HeuristicConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read engine config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Weights and switches for the heuristic selector.
///
/// Missing keys fall back to [`HeuristicConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Multiplier of the advancement term in the rank key
    pub promotion_weight: f64,
    /// Multiplier of the mobility term in the rank key
    pub space_weight: f64,
    /// Accepted for compatibility; selection is always one ply
    pub depth: u8,
    /// Score candidates on rayon workers, each with its own board copy
    pub parallel: bool,
    /// Fixed seed for the tie-break RNG (entropy when absent)
    pub seed: Option<u64>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            promotion_weight: 5.0,
            space_weight: 1.0 / 128.0,
            depth: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl HeuristicConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
