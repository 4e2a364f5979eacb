//! Responsive canvas sizing.
//!
//! The canvas fills the space left over after the page chrome (header,
//! toolbar, footer), with breakpoint-specific caps: phones get the container
//! width minus a small margin, tablets slightly more, desktops are capped at
//! 1200x800. A hard minimum of 280x300 applies everywhere.

/// Narrowest canvas the layout will ever produce.
pub const MIN_CANVAS_WIDTH: i32 = 280;
/// Shortest canvas the layout will ever produce.
pub const MIN_CANVAS_HEIGHT: i32 = 300;

/// Breakpoint below which the phone sizing rules apply (inclusive).
pub const PHONE_BREAKPOINT: i32 = 480;
/// Breakpoint below which the tablet sizing rules apply (inclusive).
pub const TABLET_BREAKPOINT: i32 = 768;

/// Vertical padding reserved around the canvas.
const LAYOUT_PADDING: i32 = 40;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// Heights of the page chrome surrounding the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeHeights {
    pub header: i32,
    pub toolbar: i32,
    pub footer: i32,
}

impl ChromeHeights {
    fn total(&self) -> i32 {
        self.header + self.toolbar + self.footer
    }
}

/// Computes the canvas size for a viewport and container width.
///
/// `container_width` is the width of the element holding the canvas; in a
/// full-width page it equals the viewport width.
pub fn canvas_size(viewport: Viewport, container_width: i32, chrome: ChromeHeights) -> (i32, i32) {
    let available_height = viewport.height - chrome.total() - LAYOUT_PADDING;

    let (width, height) = if viewport.width <= PHONE_BREAKPOINT {
        (container_width - 20, available_height.min(500))
    } else if viewport.width <= TABLET_BREAKPOINT {
        (container_width - 30, available_height.min(600))
    } else {
        ((container_width - 40).min(1200), available_height.min(800))
    };

    (width.max(MIN_CANVAS_WIDTH), height.max(MIN_CANVAS_HEIGHT))
}
