//! Color name and hex-string mapping helpers.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// Used by the configuration system and replay scripts to resolve color
/// names.
///
/// # Supported Names (case-insensitive)
/// - "black", "red", "green", "blue", "yellow", "orange", "pink", "white"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Parses a CSS-style hex color string (`#RRGGBB` or `#RGB`).
///
/// This is the format the color-picker control produces, so config files and
/// scripts accept it alongside named colors.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;

    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => {
            // Shorthand: each digit doubled (#abc -> #aabbcc)
            let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
            (d(0).ok()?, d(1).ok()?, d(2).ok()?)
        }
        _ => return None,
    };

    Some(Color::from_rgb8(r, g, b))
}

/// Resolves a color string that is either a palette name or a hex value.
pub fn resolve_color(s: &str) -> Option<Color> {
    if s.starts_with('#') {
        parse_hex_color(s)
    } else {
        name_to_color(s)
    }
}

/// Maps a Color value back to its human-readable palette name.
///
/// Uses approximate matching (0.1 tolerance) so slightly off values from a
/// picker still read as their nearest palette color in notices and logs.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else {
        "Custom"
    }
}
