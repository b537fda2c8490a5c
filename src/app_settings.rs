use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SettingsError;
use crate::physics::pool::DEFAULT_CAPACITY;
use crate::physics::PhysicsSettings;

/// Settings for the headless driver. Every field has a default, so a
/// settings file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Width of the visible world; particles a full width past either edge are retired
    pub world_width: f64,
    /// Height of the visible world
    pub world_height: f64,
    /// Number of particle slots in the pool
    pub capacity: usize,
    /// Frames to simulate before exiting
    pub frames: u64,
    /// Initial population: "figure-eight", "random", "ring" or "empty"
    pub scenario: String,
    /// Particle count for the generated scenarios
    pub scenario_particles: usize,
    /// Seed for the random scenario; entropy when absent
    pub seed: Option<u64>,
    /// Frames between progress log lines (0 disables them)
    pub report_interval: u64,
    pub physics: PhysicsSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            world_width: 900.0,
            world_height: 450.0,
            capacity: DEFAULT_CAPACITY,
            frames: 600,
            scenario: "figure-eight".to_string(),
            scenario_particles: 40,
            seed: None,
            report_interval: 60,
            physics: PhysicsSettings::default(),
        }
    }
}

impl AppSettings {
    pub const SETTINGS_FILE: &'static str = "settings.toml";

    /// Loads settings from the settings file, or returns default settings if the file doesn't exist
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Path::new(Self::SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }
}
