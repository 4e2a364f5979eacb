//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use crate::util;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named palette color
/// default_color = "black"
///
/// # Hex string, as produced by a color picker
/// default_color = "#336699"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named palette color or `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown color names fall back to black with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => util::resolve_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{name}', using black");
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
