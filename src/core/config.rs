//! Engine configuration
//!
//! Everything the engines read that is not a rule of the game lives here.
//! The rules themselves (bracket bands, round modifiers, Misery counts per
//! round) are fixed by the game and stay in their engines.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{HordeError, Result};

/// Configuration for a Horde Mode session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Optional TOML file with faction spawn tables
    ///
    /// When unset the compiled-in tables are used.
    pub spawn_tables: Option<PathBuf>,

    /// Secondary Missions revealed at the start of each battle round
    pub secondary_missions_per_round: usize,

    /// Attempt budget multiplier for Secondary Mission draws
    ///
    /// A draw of `count` missions gives up after `count * factor` picks,
    /// so a first-round draw that keeps hitting invalid missions still ends.
    pub secondary_attempt_factor: usize,

    /// Seed for the session random source; entropy when unset
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spawn_tables: None,
            secondary_missions_per_round: 1,
            secondary_attempt_factor: 3,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.secondary_attempt_factor == 0 {
            return Err(HordeError::Config(
                "secondary_attempt_factor must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Get the global engine config (initializes with defaults if not set)
pub fn config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::default)
}

/// Set the global engine config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EngineConfig) -> std::result::Result<(), EngineConfig> {
    CONFIG.set(config)
}
