//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the starting tool state when a session is created. Users change
/// these at runtime through the toolbar or keybindings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a named color (black, red, green, blue, yellow,
    /// orange, pink, white), a `#RRGGBB` hex string, or an RGB array
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 1 - 50, the slider range)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
        }
    }
}

/// Canvas layout settings for the headless driver.
///
/// The responsive sizing rules need a viewport size and the heights of the
/// page chrome around the canvas; a windowed frontend would measure these,
/// the CLI takes them from config.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Viewport width in pixels
    #[serde(default = "default_viewport_width")]
    pub viewport_width: i32,

    /// Viewport height in pixels
    #[serde(default = "default_viewport_height")]
    pub viewport_height: i32,

    /// Page header height in pixels
    #[serde(default = "default_header_height")]
    pub header_height: i32,

    /// Toolbar height in pixels
    #[serde(default = "default_toolbar_height")]
    pub toolbar_height: i32,

    /// Page footer height in pixels
    #[serde(default = "default_footer_height")]
    pub footer_height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            header_height: default_header_height(),
            toolbar_height: default_toolbar_height(),
            footer_height: default_footer_height(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported drawings are saved to (supports `~`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension; only "png" is supported
    #[serde(default = "default_format")]
    pub format: String,

    /// Watermark text stamped in the bottom-right corner of exports
    #[serde(default = "default_watermark")]
    pub watermark: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
            watermark: default_watermark(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_viewport_width() -> i32 {
    1280
}

fn default_viewport_height() -> i32 {
    800
}

fn default_header_height() -> i32 {
    80
}

fn default_toolbar_height() -> i32 {
    60
}

fn default_footer_height() -> i32 {
    40
}

fn default_export_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    // Unpadded month/day, e.g. sketch_2026-8-30
    "sketch_%Y-%-m-%-d".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_watermark() -> String {
    "Created with Sketchpad".to_string()
}
