//! Host settings
//!
//! Only how the native loop runs is configurable; the rules of the game
//! are fixed in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file looked up next to the binary's working directory
pub const DEFAULT_SETTINGS_FILE: &str = "pong.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Native loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the bounce coin flip (None = random)
    pub seed: Option<u64>,
    /// Frames per second of the host loop
    pub frame_rate: u32,
    /// Longest frame time handed to the simulation (seconds)
    pub max_frame_dt: f32,
    /// Simulated seconds the headless loop runs for
    pub run_seconds: f32,
    /// Let the host steer the player paddle toward the ball
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: 60,
            max_frame_dt: 0.1,
            run_seconds: 60.0,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load `path` if it exists; otherwise, or on error, use defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid {
                field: "frame_rate",
                reason: "must be at least 1",
            });
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "max_frame_dt",
                reason: "must be a positive number",
            });
        }
        if !self.run_seconds.is_finite() || self.run_seconds <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "run_seconds",
                reason: "must be a positive number",
            });
        }
        Ok(())
    }

    /// Frame time the host feeds the simulation
    pub fn frame_dt(&self) -> f32 {
        (1.0 / self.frame_rate as f32).min(self.max_frame_dt)
    }

    /// Number of frames the headless loop runs
    pub fn frame_count(&self) -> u64 {
        (self.run_seconds / self.frame_dt()).ceil() as u64
    }
}
