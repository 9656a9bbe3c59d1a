//! Error types for the settings crate.
//!
//! This module provides structured error types for locating, loading and
//! validating the z-hop settings file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A settings value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The settings source could not be parsed or deserialized.
    #[error("Settings source error: {0}")]
    Source(#[from] ::config::ConfigError),

    /// A configuration lookup error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to finding the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested settings file does not exist.
    #[error("Settings file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// None of the default locations contains a settings file.
    #[error("No settings file found (searched: {})", format_paths(.0))]
    NotFound(Vec<PathBuf>),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::InvalidSetting {
            key: "min_zhop".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'min_zhop': must not be negative"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound(vec![PathBuf::from("a.ini"), PathBuf::from("b.ini")]);
        assert_eq!(
            err.to_string(),
            "No settings file found (searched: a.ini, b.ini)"
        );

        let err = ConfigError::FileNotFound(PathBuf::from("missing.ini"));
        assert_eq!(err.to_string(), "Settings file not found: missing.ini");
    }

    #[test]
    fn test_error_conversion() {
        let settings_err: SettingsError = ConfigError::NotFound(vec![]).into();
        assert!(matches!(settings_err, SettingsError::Config(_)));
    }
}
