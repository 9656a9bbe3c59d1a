//! Z-hop settings
//!
//! The settings file is a flat INI document with a `[Settings]` section:
//!
//! ```ini
//! [Settings]
//! min_zhop = 0.2
//! max_zhop = 1.0
//! max_zhop_distance_threshold = 20
//! z_lower_feedrate = 6000
//! second_move_percent = 30
//! ```
//!
//! TOML and JSON files with the same `Settings` table are accepted when the
//! file extension says so. Every key is required; there are no fallbacks.

use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Default settings file name
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Directory name used under the platform configuration directory
const APP_DIR_NAME: &str = "zhopkit";

/// Settings file layout: one `Settings` section
#[derive(Debug, Deserialize)]
struct SettingsDocument {
    #[serde(alias = "Settings")]
    settings: RawSettings,
}

/// Settings as they are spelled in the file
#[derive(Debug, Deserialize)]
struct RawSettings {
    min_zhop: f64,
    max_zhop: f64,
    max_zhop_distance_threshold: f64,
    z_lower_feedrate: u32,
    second_move_percent: u32,
}

/// Immutable z-hop parameters for one processing run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HopSettings {
    /// Hop height used for the shortest travels (mm)
    pub min_hop: f64,
    /// Hop height used at and above the distance threshold (mm)
    pub max_hop: f64,
    /// Travel distance at which `max_hop` is reached (mm)
    pub max_hop_distance_threshold: f64,
    /// Feedrate of the descent move after a hop
    pub z_lower_feedrate: u32,
    /// Share of the horizontal travel that happens after the peak, 0..=1
    pub second_move_fraction: f64,
}

impl Default for HopSettings {
    fn default() -> Self {
        Self {
            min_hop: 0.2,
            max_hop: 1.0,
            max_hop_distance_threshold: 20.0,
            z_lower_feedrate: 6000,
            second_move_fraction: 0.3,
        }
    }
}

impl From<RawSettings> for HopSettings {
    fn from(raw: RawSettings) -> Self {
        Self {
            min_hop: raw.min_zhop,
            max_hop: raw.max_zhop,
            max_hop_distance_threshold: raw.max_zhop_distance_threshold,
            z_lower_feedrate: raw.z_lower_feedrate,
            second_move_fraction: f64::from(raw.second_move_percent) / 100.0,
        }
    }
}

impl HopSettings {
    /// Create settings from explicit values
    pub fn new(
        min_hop: f64,
        max_hop: f64,
        max_hop_distance_threshold: f64,
        z_lower_feedrate: u32,
        second_move_fraction: f64,
    ) -> Self {
        Self {
            min_hop,
            max_hop,
            max_hop_distance_threshold,
            z_lower_feedrate,
            second_move_fraction,
        }
    }

    /// Fraction of the travel at which the hop peaks
    pub fn peak_fraction(&self) -> f64 {
        1.0 - self.second_move_fraction
    }

    /// Load and validate settings from a file.
    ///
    /// `.toml` and `.json` extensions select those formats, anything else
    /// is read as INI.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
        }

        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => FileFormat::Toml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Ini,
        };

        let source = Config::builder()
            .add_source(File::from(path).format(format))
            .build()?;
        let settings = Self::from_source(source)?;

        tracing::debug!(
            path = %path.display(),
            min_hop = settings.min_hop,
            max_hop = settings.max_hop,
            threshold = settings.max_hop_distance_threshold,
            z_lower_feedrate = settings.z_lower_feedrate,
            second_move_fraction = settings.second_move_fraction,
            "Loaded z-hop settings"
        );

        Ok(settings)
    }

    /// Parse and validate settings from INI text
    pub fn from_ini_str(content: &str) -> SettingsResult<Self> {
        let source = Config::builder()
            .add_source(File::from_str(content, FileFormat::Ini))
            .build()?;
        Self::from_source(source)
    }

    fn from_source(source: Config) -> SettingsResult<Self> {
        let document: SettingsDocument = source.try_deserialize()?;
        let settings = Self::from(document.settings);
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        let finite = [
            ("min_zhop", self.min_hop),
            ("max_zhop", self.max_hop),
            ("max_zhop_distance_threshold", self.max_hop_distance_threshold),
        ];
        for (key, value) in finite {
            if !value.is_finite() {
                return Err(invalid(key, "must be a finite number"));
            }
        }

        if self.min_hop < 0.0 {
            return Err(invalid("min_zhop", "must not be negative"));
        }

        if self.max_hop < self.min_hop {
            return Err(invalid("max_zhop", "must be greater than or equal to min_zhop"));
        }

        if self.max_hop_distance_threshold <= 0.0 {
            return Err(invalid("max_zhop_distance_threshold", "must be > 0"));
        }

        if self.z_lower_feedrate == 0 {
            return Err(invalid("z_lower_feedrate", "must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.second_move_fraction) {
            return Err(invalid("second_move_percent", "must be between 0 and 100"));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Candidate locations for the settings file, in lookup order:
/// beside the executable, the working directory, then the platform
/// configuration directory.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join(CONFIG_FILE_NAME));
    }

    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        if !paths.contains(&candidate) {
            paths.push(candidate);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    paths
}

/// Resolve the settings file to load.
///
/// An explicit path must exist. Without one, the first existing entry of
/// [`default_search_paths`] wins.
pub fn locate_settings_file(explicit: Option<&Path>) -> SettingsResult<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
    }

    let candidates = default_search_paths();
    match candidates.iter().find(|p| p.is_file()) {
        Some(found) => {
            tracing::debug!("Using settings file {}", found.display());
            Ok(found.clone())
        }
        None => Err(ConfigError::NotFound(candidates).into()),
    }
}
