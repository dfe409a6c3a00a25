//! Settings Persistence
//!
//! Resolves where the configuration and the live layout snapshot are stored and
//! loads the configuration from there, falling back to defaults on first run.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "seatkit";
const CONFIG_FILE: &str = "config.toml";
const SNAPSHOT_FILE: &str = "layout.json";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    config_path: PathBuf,
}

impl SettingsPersistence {
    /// Create a persistence layer with default config, bound to `config_path`
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            config_path: config_path.into(),
        }
    }

    /// Load config from the platform config directory, or defaults if no file exists yet
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(default_config_path()?)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::new(path));
        }

        let config = Config::load_from_file(&path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            config,
            config_path: path,
        })
    }

    /// Write the current config back to its file
    pub fn save(&self) -> SettingsResult<()> {
        self.config
            .save_to_file(&self.config_path)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", self.config_path.display(), e)))
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// File this config is read from and written to
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Where the live layout snapshot is kept
    pub fn snapshot_path(&self) -> SettingsResult<PathBuf> {
        match &self.config.storage.snapshot_path {
            Some(path) => Ok(path.clone()),
            None => default_snapshot_path(),
        }
    }

    /// Where dated exports are written
    pub fn export_directory(&self) -> PathBuf {
        self.config
            .storage
            .export_directory
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Default config file location: `<config dir>/seatkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| SettingsError::ConfigDirectory("no config directory on this platform".into()))
}

/// Default snapshot location: `<data dir>/seatkit/layout.json`
pub fn default_snapshot_path() -> SettingsResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(SNAPSHOT_FILE))
        .ok_or_else(|| SettingsError::ConfigDirectory("no data directory on this platform".into()))
}
