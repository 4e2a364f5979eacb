//! Viewport-to-canvas coordinate mapping.

/// Offset of the canvas within the viewport.
///
/// Pointer events carry absolute viewport coordinates; subtracting this
/// offset yields canvas-local coordinates. Assumes the canvas is laid out in
/// the viewport, so the mapping is infallible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasBounds {
    /// Distance from the viewport's left edge to the canvas
    pub left: f64,
    /// Distance from the viewport's top edge to the canvas
    pub top: f64,
}

impl CanvasBounds {
    /// Creates bounds with the given offsets.
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Converts viewport coordinates to canvas-local coordinates.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_canvas_offset() {
        let bounds = CanvasBounds::new(12.0, 80.0);
        assert_eq!(bounds.to_canvas(12.0, 80.0), (0.0, 0.0));
        assert_eq!(bounds.to_canvas(112.0, 130.0), (100.0, 50.0));
    }

    #[test]
    fn default_bounds_are_identity() {
        let bounds = CanvasBounds::default();
        assert_eq!(bounds.to_canvas(33.5, 7.25), (33.5, 7.25));
    }
}
