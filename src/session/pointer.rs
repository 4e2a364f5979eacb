//! Pointer event handling: stroke begin, continue, and end.

use super::core::{Session, SessionError, StrokeState};
use crate::input::Tool;

impl Session {
    /// Starts a stroke at the given viewport coordinates.
    ///
    /// A tap with no movement still leaves a mark: a filled dot of the brush
    /// diameter is rendered immediately.
    pub(crate) fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<(), SessionError> {
        let (cx, cy) = self.to_canvas(x, y);
        let erase = self.tool() == Tool::Eraser;
        self.canvas
            .dot(cx, cy, f64::from(self.brush_size()), self.color(), erase)?;
        self.stroke = StrokeState::Active {
            last_x: cx,
            last_y: cy,
        };
        self.needs_redraw = true;
        Ok(())
    }

    /// Extends the active stroke to the given viewport coordinates.
    ///
    /// Renders a single segment from the previous point, so cost per event
    /// is constant regardless of stroke length. Moves while no stroke is
    /// active are ignored.
    pub(crate) fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<(), SessionError> {
        let StrokeState::Active { last_x, last_y } = self.stroke else {
            return Ok(());
        };
        let (cx, cy) = self.to_canvas(x, y);
        let erase = self.tool() == Tool::Eraser;
        self.canvas.segment(
            last_x,
            last_y,
            cx,
            cy,
            f64::from(self.brush_size()),
            self.color(),
            erase,
        )?;
        self.stroke = StrokeState::Active {
            last_x: cx,
            last_y: cy,
        };
        self.needs_redraw = true;
        Ok(())
    }

    /// Ends the active stroke and records a history snapshot.
    ///
    /// Idempotent: pointer-up and pointer-leave can both arrive for one
    /// stroke, but only the first ends it. A completed stroke records
    /// exactly one snapshot.
    pub(crate) fn on_pointer_up(&mut self) -> Result<(), SessionError> {
        if self.stroke == StrokeState::Idle {
            return Ok(());
        }
        self.stroke = StrokeState::Idle;
        self.record()?;
        Ok(())
    }
}
