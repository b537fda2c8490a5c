//! Errors raised while loading settings for the driver.
//!
//! The simulation kernel itself has no failure modes: a full pool drops the
//! spawn, degenerate geometry is clamped, and the prefix invariant is a debug
//! assertion.

use std::fmt;

#[derive(Debug)]
pub enum SettingsError {
    /// Failed to read the settings file.
    Io(std::io::Error),
    /// The file is not valid settings TOML.
    Parse(toml::de::Error),
    /// No scenario is registered under this name.
    UnknownScenario(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings file: {}", e),
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::UnknownScenario(name) => write!(
                f,
                "Unknown scenario '{}'. Expected one of: figure-eight, random, ring, empty",
                name
            ),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::UnknownScenario(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        SettingsError::Parse(e)
    }
}
