//! Configuration and settings management for SeatKit
//!
//! Configuration is organized into logical sections:
//! - Editor settings (seat marker size, layout geometry constants, zoom limits)
//! - Storage settings (autosave, snapshot location, recent files)
//!
//! Supports JSON and TOML file formats, chosen by file extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Editor and seat layout geometry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Diameter of a seat marker at zoom 1.0
    pub seat_size: f64,
    /// Gap between a table body and its seat markers
    pub seat_margin: f64,
    /// Height of the stage area above theater and amphitheater rows
    pub header_height: f64,
    /// Radius of the innermost amphitheater row
    pub amphitheater_base_radius: f64,
    /// Radius added per amphitheater row
    pub amphitheater_radius_step: f64,
    /// Angular width of an amphitheater row in degrees
    pub amphitheater_span_degrees: f64,
    /// Vertical squash applied to amphitheater arcs (1.0 = true circle)
    pub amphitheater_compression: f64,
    /// Smallest zoom factor
    pub min_zoom: f64,
    /// Largest zoom factor
    pub max_zoom: f64,
    /// Factor applied by one zoom step
    pub zoom_step: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            seat_size: 30.0,
            seat_margin: 8.0,
            header_height: 40.0,
            amphitheater_base_radius: 60.0,
            amphitheater_radius_step: 40.0,
            amphitheater_span_degrees: 120.0,
            amphitheater_compression: 0.6,
            min_zoom: 0.25,
            max_zoom: 4.0,
            zoom_step: 1.2,
        }
    }
}

/// Layout storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Save the layout after every change
    pub autosave: bool,
    /// Where the live layout is persisted; the platform data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
    /// Where dated exports are written; the home directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_directory: Option<PathBuf>,
    /// Number of recent files to track
    pub recent_files_count: usize,
    /// Recently imported or exported snapshot files, newest first
    pub recent_files: Vec<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            autosave: true,
            snapshot_path: None,
            export_directory: None,
            recent_files_count: 10,
            recent_files: Vec::new(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor and geometry preferences
    pub editor: EditorSettings,
    /// Layout storage preferences
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let editor = &self.editor;

        let positive = [
            ("editor.seat_size", editor.seat_size),
            ("editor.header_height", editor.header_height),
            ("editor.amphitheater_base_radius", editor.amphitheater_base_radius),
            ("editor.amphitheater_radius_step", editor.amphitheater_radius_step),
            ("editor.amphitheater_compression", editor.amphitheater_compression),
            ("editor.min_zoom", editor.min_zoom),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !(editor.seat_margin.is_finite() && editor.seat_margin >= 0.0) {
            return Err(ConfigError::out_of_range(
                "editor.seat_margin",
                editor.seat_margin,
            ));
        }

        if !(editor.amphitheater_span_degrees > 0.0 && editor.amphitheater_span_degrees <= 360.0)
        {
            return Err(ConfigError::out_of_range(
                "editor.amphitheater_span_degrees",
                editor.amphitheater_span_degrees,
            ));
        }

        if !(editor.max_zoom.is_finite() && editor.max_zoom >= editor.min_zoom) {
            return Err(ConfigError::out_of_range("editor.max_zoom", editor.max_zoom));
        }

        if !(editor.zoom_step.is_finite() && editor.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range(
                "editor.zoom_step",
                editor.zoom_step,
            ));
        }

        if self.storage.recent_files_count == 0 {
            return Err(ConfigError::out_of_range("storage.recent_files_count", 0));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        let storage = &mut self.storage;
        storage.recent_files.retain(|f| f != &path);
        storage.recent_files.insert(0, path);
        storage.recent_files.truncate(storage.recent_files_count);
    }
}

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
