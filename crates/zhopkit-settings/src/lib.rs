//! ZHopKit Settings Crate
//!
//! Loads the z-hop parameters from an INI (or TOML/JSON) settings file,
//! validates them and exposes them as an immutable [`HopSettings`] record.

pub mod config;
pub mod error;

pub use crate::config::{default_search_paths, locate_settings_file, HopSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
