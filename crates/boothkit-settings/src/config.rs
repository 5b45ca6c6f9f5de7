//! Configuration for BoothKit
//!
//! Configuration is organized into logical sections:
//! - Editor behavior (grid, snapping, history depth, paste offset, groups)
//! - Export defaults (resolution multiplier, background, sample photos)
//! - Font resolution (remote font cache directory, fallback family)
//!
//! Files may be JSON or TOML; the format is chosen by extension.

use boothkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Editing engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing used when snapping
    pub grid_size: f64,
    /// Snap moves and resizes to the grid
    pub snap_to_grid: bool,
    /// Maximum number of undo snapshots
    pub history_capacity: usize,
    /// Offset applied to pasted elements
    pub paste_offset: f64,
    /// Padding around a group's children
    pub group_padding: f64,
    /// Minimum element width/height
    pub min_element_size: f64,
    /// Canvas width for new documents
    pub default_canvas_width: f64,
    /// Canvas height for new documents
    pub default_canvas_height: f64,
    /// Background color for new documents
    pub default_background: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: constants::GRID_SIZE,
            snap_to_grid: false,
            history_capacity: constants::HISTORY_CAPACITY,
            paste_offset: constants::PASTE_OFFSET,
            group_padding: constants::GROUP_PADDING,
            min_element_size: constants::MIN_ELEMENT_SIZE,
            default_canvas_width: constants::DEFAULT_CANVAS_WIDTH,
            default_canvas_height: constants::DEFAULT_CANVAS_HEIGHT,
            default_background: "#ffffff".to_string(),
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Output resolution multiplier
    pub multiplier: f32,
    /// Fill the layout background
    pub include_background: bool,
    /// Put a sample photo into camera slots
    pub include_sample_photos: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            include_background: true,
            include_sample_photos: true,
        }
    }
}

/// Font resolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Directory holding font files fetched for "remote" families
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_font_dir: Option<PathBuf>,
    /// Local family used when a font cannot be resolved
    pub fallback_family: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            remote_font_dir: None,
            fallback_family: "Sans".to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor settings
    pub editor: EditorSettings,
    /// Export settings
    pub export: ExportSettings,
    /// Font settings
    pub fonts: FontSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/boothkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("boothkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let editor = &self.editor;
        if !(editor.grid_size > 0.0) {
            return Err(SettingsError::invalid("editor.grid_size", "must be > 0"));
        }
        if editor.history_capacity == 0 {
            return Err(SettingsError::invalid(
                "editor.history_capacity",
                "must be > 0",
            ));
        }
        if !(editor.min_element_size > 0.0) {
            return Err(SettingsError::invalid(
                "editor.min_element_size",
                "must be > 0",
            ));
        }
        if editor.group_padding < 0.0 {
            return Err(SettingsError::invalid(
                "editor.group_padding",
                "must not be negative",
            ));
        }
        if editor.default_canvas_width < editor.min_element_size
            || editor.default_canvas_height < editor.min_element_size
        {
            return Err(SettingsError::invalid(
                "editor.default_canvas_width",
                "canvas must be at least the minimum element size",
            ));
        }

        if !(self.export.multiplier > 0.0) || !self.export.multiplier.is_finite() {
            return Err(SettingsError::invalid(
                "export.multiplier",
                "must be a positive number",
            ));
        }

        if self.fonts.fallback_family.trim().is_empty() {
            return Err(SettingsError::invalid(
                "fonts.fallback_family",
                "must not be empty",
            ));
        }

        Ok(())
    }
}
