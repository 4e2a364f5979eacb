//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchpad/config.toml`. Settings
//! include drawing defaults, canvas layout inputs, export options, and
//! keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// sensible defaults and use them when not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_brush_size = 5
///
/// [export]
/// directory = "~/Pictures/Sketchpad"
/// watermark = "Created with Sketchpad"
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, brush size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas layout inputs (viewport and chrome sizes)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export options (directory, filename, watermark)
    #[serde(default)]
    pub export: ExportConfig,

    /// Keyboard shortcut assignments
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged, so a bad config never aborts startup.
    fn validate_and_clamp(&mut self) {
        // Brush size: 1 - 50 (the slider range)
        if !(1..=50).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to 1-50 range",
                self.drawing.default_brush_size
            );
            self.drawing.default_brush_size = self.drawing.default_brush_size.clamp(1, 50);
        }

        // Viewport must be large enough to hold the minimum canvas
        if self.canvas.viewport_width < 100 {
            log::warn!(
                "Invalid viewport_width {}, clamping to 100",
                self.canvas.viewport_width
            );
            self.canvas.viewport_width = 100;
        }
        if self.canvas.viewport_height < 100 {
            log::warn!(
                "Invalid viewport_height {}, clamping to 100",
                self.canvas.viewport_height
            );
            self.canvas.viewport_height = 100;
        }

        // Chrome heights: 0 - 500
        for (name, value) in [
            ("header_height", &mut self.canvas.header_height),
            ("toolbar_height", &mut self.canvas.toolbar_height),
            ("footer_height", &mut self.canvas.footer_height),
        ] {
            if !(0..=500).contains(value) {
                log::warn!("Invalid {name} {value}, clamping to 0-500 range");
                *value = (*value).clamp(0, 500);
            }
        }

        // Only PNG export is supported
        if !self.export.format.eq_ignore_ascii_case("png") {
            log::warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/sketchpad/config.toml`, creating the parent directory if
    /// needed. Used by `--init-config`.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema for the configuration file format.
    ///
    /// Used by the `dump_config_schema` helper binary so external tools can
    /// validate configs.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
