//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines how strokes composite onto the canvas: the pen
/// paints in the current color, the eraser clears pixels to transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand painting in the current color (default)
    Pen,
    /// Freehand erasing (pixels are cleared, not painted white)
    Eraser,
}

impl Tool {
    /// Whether this tool erases rather than paints.
    pub fn is_eraser(self) -> bool {
        matches!(self, Tool::Eraser)
    }
}
