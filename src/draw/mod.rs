//! Rendering primitives and the canvas surface (Cairo-based).
//!
//! This module defines the core drawing types of the sketch pad:
//! - [`Color`]: RGBA color representation with the swatch palette constants
//! - [`Canvas`]: the ARGB32 raster surface strokes are rendered onto
//! - Stroke rendering functions (dot on stroke start, segments on move)

pub mod canvas;
pub mod color;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Canvas, DrawError, Pixel};
pub use color::{Color, PALETTE};
pub use render::{render_dot, render_segment};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
