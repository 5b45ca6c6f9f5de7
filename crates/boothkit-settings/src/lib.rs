//! BoothKit Settings Crate
//!
//! Handles editor, export and font configuration and its persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, EditorSettings, ExportSettings, FontSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
