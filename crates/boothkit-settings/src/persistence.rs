//! Settings Persistence
//!
//! Loads settings from the platform config location, falling back to
//! defaults when no file exists yet, and writes them back on request.

use crate::config::Config;
use crate::error::SettingsResult;
use std::path::{Path, PathBuf};

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config and no backing file
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            path: None,
        }
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load settings from `path`, or use defaults if the file does not exist
    ///
    /// An existing but invalid file is still an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            return Self::load_from_file(path);
        }
        tracing::debug!(
            "No settings at {}, using defaults",
            path.display()
        );
        Ok(Self {
            config: Config::default(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Load from [`Config::default_path`]
    pub fn load_default_location() -> SettingsResult<Self> {
        Self::load_or_default(&Config::default_path()?)
    }

    /// Save settings to the file they were loaded from
    ///
    /// Falls back to [`Config::default_path`] for a detached instance.
    pub fn save(&self) -> SettingsResult<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        self.save_to_file(&path)
    }

    /// Save settings to file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.config.save_to_file(path)?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()
    }
}

impl Default for SettingsPersistence {
    fn default() -> Self {
        Self::new()
    }
}
