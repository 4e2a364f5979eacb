//! The raster canvas surface.
//!
//! Wraps an ARGB32 cairo image surface and exposes the stroke, snapshot, and
//! restore operations the session needs. Contexts are created per operation
//! so the surface is never aliased when its pixel data is borrowed.

use thiserror::Error;

use super::color::Color;
use super::render;
use crate::history::{DecodedImage, Snapshot};

/// Errors from canvas surface operations.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("cairo i/o error: {0}")]
    Io(#[from] cairo::IoError),

    #[error("canvas pixel data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("pixel ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: i32, y: i32 },
}

/// One pixel read back from the canvas, un-premultiplied channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// The drawing surface: an ARGB32 raster buffer plus its dimensions.
///
/// Erased regions are transparent (alpha 0), not white; whatever sits under
/// the canvas shows through until export composites onto a white background.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Creates a transparent canvas of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, DrawError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The underlying cairo surface, for compositing during export.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    fn context(&self) -> Result<cairo::Context, DrawError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Renders the stroke-start dot at (x, y).
    pub fn dot(&self, x: f64, y: f64, diameter: f64, color: Color, erase: bool) -> Result<(), DrawError> {
        let ctx = self.context()?;
        render::render_dot(&ctx, x, y, diameter, color, erase);
        Ok(())
    }

    /// Renders one stroke segment. O(1) per pointer-move.
    #[allow(clippy::too_many_arguments)]
    pub fn segment(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
        erase: bool,
    ) -> Result<(), DrawError> {
        let ctx = self.context()?;
        render::render_segment(&ctx, x1, y1, x2, y2, width, color, erase);
        Ok(())
    }

    /// Clears every pixel back to transparent.
    pub fn clear(&self) -> Result<(), DrawError> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Captures the current pixel contents as a PNG-encoded snapshot.
    pub fn snapshot(&self) -> Result<Snapshot, DrawError> {
        let mut bytes = Vec::new();
        self.surface.write_to_png(&mut bytes)?;
        Ok(Snapshot::from_png(bytes))
    }

    /// Replaces the canvas contents with a decoded snapshot.
    ///
    /// Clears first, then paints the image at the origin. The caller is
    /// responsible for having awaited the decode; see
    /// [`Snapshot::load`](crate::history::Snapshot::load).
    pub fn restore(&self, image: DecodedImage) -> Result<(), DrawError> {
        let DecodedImage {
            format,
            width,
            height,
            stride,
            data,
        } = image;
        let source = cairo::ImageSurface::create_for_data(data, format, width, height, stride)?;

        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_surface(&source, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Reads back a single pixel, un-premultiplying the color channels.
    ///
    /// Needs `&mut self` because cairo hands out pixel data only while the
    /// surface is not aliased.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Pixel, DrawError> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return Err(DrawError::OutOfBounds { x, y });
        }

        self.surface.flush();
        let stride = self.surface.stride();
        let data = self.surface.data()?;

        let offset = (y * stride + x * 4) as usize;
        let raw: [u8; 4] = data[offset..offset + 4]
            .try_into()
            .unwrap_or([0, 0, 0, 0]);
        let px = u32::from_ne_bytes(raw);

        let a = ((px >> 24) & 0xff) as u8;
        let unmul = |c: u32| -> u8 {
            if a == 0 {
                0
            } else {
                ((c * 255) / a as u32).min(255) as u8
            }
        };

        Ok(Pixel {
            r: unmul((px >> 16) & 0xff),
            g: unmul((px >> 8) & 0xff),
            b: unmul(px & 0xff),
            a,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn new_canvas_is_transparent() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let px = canvas.pixel(20, 20).unwrap();
        assert_eq!(px.a, 0);
    }

    #[test]
    fn dot_paints_center_pixel() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.dot(20.0, 20.0, 6.0, RED, false).unwrap();
        let px = canvas.pixel(20, 20).unwrap();
        assert_eq!(px.a, 255);
        assert_eq!(px.r, 255);
        assert_eq!(px.g, 0);
    }

    #[test]
    fn eraser_segment_clears_painted_pixels() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.segment(0.0, 20.0, 40.0, 20.0, 8.0, BLACK, false).unwrap();
        assert_eq!(canvas.pixel(20, 20).unwrap().a, 255);

        canvas.segment(0.0, 20.0, 40.0, 20.0, 8.0, BLACK, true).unwrap();
        // Cleared, not painted white
        assert_eq!(canvas.pixel(20, 20).unwrap().a, 0);
    }

    #[test]
    fn pixel_outside_canvas_is_an_error() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        assert!(matches!(
            canvas.pixel(40, 0),
            Err(DrawError::OutOfBounds { x: 40, y: 0 })
        ));
        assert!(canvas.pixel(-1, 10).is_err());
        assert!(canvas.pixel(0, 40).is_err());
        assert!(canvas.pixel(39, 39).is_ok());
    }

    #[test]
    fn clear_resets_all_pixels() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.dot(10.0, 10.0, 10.0, BLACK, false).unwrap();
        canvas.clear().unwrap();
        assert_eq!(canvas.pixel(10, 10).unwrap().a, 0);
    }

    #[tokio::test]
    async fn snapshot_round_trips_through_restore() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.dot(20.0, 20.0, 8.0, RED, false).unwrap();
        let snapshot = canvas.snapshot().unwrap();

        canvas.clear().unwrap();
        assert_eq!(canvas.pixel(20, 20).unwrap().a, 0);

        let image = snapshot.load().await.unwrap();
        assert_eq!(image.width(), 40);
        canvas.restore(image).unwrap();

        let px = canvas.pixel(20, 20).unwrap();
        assert_eq!(px.a, 255);
        assert_eq!(px.r, 255);
    }
}
