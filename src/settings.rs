//! Runtime settings for the host loop
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/// Failure to read or parse a settings/tuning file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed for level content (random when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Headless runner ===
    /// Stop after this many ticks
    pub max_ticks: u64,
    /// Drive the player with the demo autopilot
    pub autopilot: bool,
    /// Print a HUD snapshot every N ticks (0 = never)
    pub hud_interval: u64,

    /// Optional balance override file
    pub tuning_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            max_ticks: 60 * 60 * 5,
            autopilot: true,
            hud_interval: 60 * 10,

            tuning_path: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Balance table named by `tuning_path`, or the defaults
    pub fn load_tuning(&self) -> Result<Tuning, ConfigError> {
        match &self.tuning_path {
            Some(path) => Tuning::load_from_path(path),
            None => Ok(Tuning::default()),
        }
    }
}
