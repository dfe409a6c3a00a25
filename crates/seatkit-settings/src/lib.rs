//! SeatKit Settings Crate
//!
//! Handles editor configuration and where configuration and layout files live on disk.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, EditorSettings, StorageSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
