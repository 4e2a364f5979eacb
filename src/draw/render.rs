//! Cairo-based stroke rendering primitives.
//!
//! Strokes are rendered directly onto the canvas surface: a filled dot when a
//! stroke starts, then one line segment per pointer-move while it is active.
//! The eraser uses `Operator::Clear` so erased pixels become transparent
//! instead of being painted white.

use super::color::Color;

/// Applies the source color and compositing operator for a stroke operation.
///
/// Pen strokes paint over existing content; eraser strokes punch pixels out
/// of the surface entirely.
fn apply_brush(ctx: &cairo::Context, color: Color, erase: bool) {
    if erase {
        ctx.set_operator(cairo::Operator::Clear);
    } else {
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

/// Renders a filled circle of the given diameter centered at (x, y).
///
/// Drawn at stroke start so that a tap with no movement still produces a
/// visible dot of diameter equal to the brush size.
pub fn render_dot(ctx: &cairo::Context, x: f64, y: f64, diameter: f64, color: Color, erase: bool) {
    if diameter <= 0.0 {
        return;
    }

    let _ = ctx.save();
    apply_brush(ctx, color, erase);
    ctx.arc(x, y, diameter / 2.0, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
    let _ = ctx.restore();
}

/// Renders one stroke segment from (x1, y1) to (x2, y2).
///
/// Round caps and joins keep consecutive segments of a freehand stroke from
/// showing seams. Called once per pointer-move, so it must stay O(1).
#[allow(clippy::too_many_arguments)]
pub fn render_segment(
    ctx: &cairo::Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    width: f64,
    color: Color,
    erase: bool,
) {
    if width <= 0.0 {
        return;
    }

    let _ = ctx.save();
    apply_brush(ctx, color, erase);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}
