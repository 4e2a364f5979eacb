//! The drawing session controller.
//!
//! All mutable state of the sketch pad lives here: the canvas surface, the
//! snapshot history, the tool state, the stroke-in-progress flag, and the
//! transient user notice. Session methods are the only mutation entry
//! points; drivers feed normalized input events in and read the flags out.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::{Action, KeyBinding};
use crate::draw::{Canvas, Color, DrawError, PALETTE, Pixel};
use crate::history::{History, HistoryError, Snapshot};
use crate::input::{CanvasBounds, InputEvent, Modifiers, Tool};

/// How long a posted notice stays active.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// A transient, auto-expiring user notice.
///
/// Only one notice exists at a time; posting a new one replaces the old.
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    posted_at: Instant,
}

impl Notice {
    /// The notice text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the notice should still be displayed at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        now.duration_since(self.posted_at) < NOTICE_DURATION
    }
}

/// Whether a stroke is currently in progress.
///
/// The explicit flag is what makes stroke termination idempotent: pointer-up
/// and pointer-leave can both arrive, but only the transition from `Active`
/// to `Idle` records a history snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StrokeState {
    /// Not drawing - waiting for a pointer-down
    Idle,
    /// Stroke in progress; holds the previous point for segment rendering
    Active { last_x: f64, last_y: f64 },
}

/// Main session state owning the canvas, history, and tool settings.
pub struct Session {
    pub(crate) canvas: Canvas,
    pub(crate) history: History,
    /// Canvas offset within the viewport, for coordinate mapping
    bounds: CanvasBounds,
    /// Brush diameter in pixels
    brush_size: u32,
    /// Current pen color
    color: Color,
    /// Active tool (pen or eraser)
    tool: Tool,
    /// Index of the active palette swatch, when the color matches one
    active_swatch: Option<usize>,
    /// Current modifier key state
    pub(crate) modifiers: Modifiers,
    /// Stroke-in-progress flag
    pub(crate) stroke: StrokeState,
    /// Current transient notice, if any
    notice: Option<Notice>,
    /// Export requested via keybinding; the driver retrieves and handles it
    pending_export: bool,
    /// Clear requested via keybinding; the driver confirms before clearing
    pending_clear: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Keybinding action map
    action_map: HashMap<KeyBinding, Action>,
}

impl Session {
    /// Creates a session with a blank canvas of the given size.
    ///
    /// The blank canvas is recorded as the initial history snapshot, so the
    /// first undo after a stroke returns to it.
    pub fn new(
        width: i32,
        height: i32,
        color: Color,
        brush_size: u32,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Result<Self, SessionError> {
        let canvas = Canvas::new(width, height)?;
        let initial = canvas.snapshot()?;

        let mut session = Self {
            canvas,
            history: History::new(initial),
            bounds: CanvasBounds::default(),
            brush_size,
            color,
            tool: Tool::Pen,
            active_swatch: PALETTE.iter().position(|c| *c == color),
            modifiers: Modifiers::new(),
            stroke: StrokeState::Idle,
            notice: None,
            pending_export: false,
            pending_clear: false,
            needs_redraw: true,
            action_map,
        };

        session.post_notice("Welcome to Sketchpad! Start drawing...");
        Ok(session)
    }

    /// Dispatches one normalized input event.
    ///
    /// Async because a key press may trigger undo/redo, which awaits the
    /// snapshot decode before repainting.
    pub async fn handle_event(&mut self, event: InputEvent) -> Result<(), SessionError> {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y)?,
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y)?,
            InputEvent::PointerUp => self.on_pointer_up()?,
            InputEvent::KeyPress { key } => self.on_key_press(key).await?,
            InputEvent::KeyRelease { key } => self.on_key_release(key),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tool state
    // ------------------------------------------------------------------

    /// Current brush diameter in pixels.
    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Sets the brush diameter. Values are accepted as-is; the size control
    /// feeding this is trusted to constrain its range.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size;
    }

    /// Current pen color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the pen color and switches back to the pen tool.
    ///
    /// Picking a color while erasing always means "draw in this color now",
    /// so the eraser is deactivated. The active swatch marker follows the
    /// color: it is set when the color matches a palette entry exactly,
    /// cleared otherwise.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.active_swatch = PALETTE.iter().position(|c| *c == color);
        self.activate_pen();
    }

    /// Selects a palette swatch by index.
    ///
    /// Returns `false` (and does nothing) if the index is out of range.
    pub fn select_swatch(&mut self, index: usize) -> bool {
        match PALETTE.get(index) {
            Some(color) => {
                self.color = *color;
                self.active_swatch = Some(index);
                self.activate_pen();
                true
            }
            None => false,
        }
    }

    /// Index of the active palette swatch, if the current color is one.
    pub fn active_swatch(&self) -> Option<usize> {
        self.active_swatch
    }

    /// Active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches to the pen tool (paint compositing).
    pub fn activate_pen(&mut self) {
        self.tool = Tool::Pen;
        self.needs_redraw = true;
    }

    /// Switches to the eraser tool (clear compositing).
    pub fn activate_eraser(&mut self) {
        self.tool = Tool::Eraser;
        self.needs_redraw = true;
    }

    /// Updates the canvas offset used for coordinate mapping.
    pub fn set_canvas_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    pub(crate) fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        self.bounds.to_canvas(x, y)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Captures the canvas as a new history snapshot.
    pub(crate) fn record(&mut self) -> Result<(), SessionError> {
        let snapshot = self.canvas.snapshot()?;
        self.history.record(snapshot);
        log::debug!(
            "Recorded snapshot {}/{}",
            self.history.index() + 1,
            self.history.len()
        );
        Ok(())
    }

    /// Steps back one history entry and restores the canvas.
    ///
    /// Returns `Ok(false)` and posts "Nothing to undo!" at the history
    /// boundary. The canvas is only visually updated once this future
    /// resolves.
    pub async fn undo(&mut self) -> Result<bool, SessionError> {
        match self.history.undo() {
            Some(snapshot) => {
                if let Err(err) = self.apply_snapshot(&snapshot).await {
                    // Cursor must keep matching the displayed pixels, which
                    // a failed restore left untouched.
                    self.history.redo();
                    return Err(err);
                }
                self.needs_redraw = true;
                Ok(true)
            }
            None => {
                self.post_notice("Nothing to undo!");
                Ok(false)
            }
        }
    }

    /// Steps forward one history entry and restores the canvas.
    ///
    /// Returns `Ok(false)` and posts "Nothing to redo!" at the tail.
    pub async fn redo(&mut self) -> Result<bool, SessionError> {
        match self.history.redo() {
            Some(snapshot) => {
                if let Err(err) = self.apply_snapshot(&snapshot).await {
                    self.history.undo();
                    return Err(err);
                }
                self.needs_redraw = true;
                Ok(true)
            }
            None => {
                self.post_notice("Nothing to redo!");
                Ok(false)
            }
        }
    }

    /// Decodes a snapshot and repaints the canvas from it.
    async fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SessionError> {
        let image = snapshot.load().await?;
        self.canvas.restore(image)?;
        Ok(())
    }

    /// Clears the canvas and records the blank state as a new snapshot.
    ///
    /// Destructive from the user's perspective, so drivers confirm before
    /// calling; the resulting snapshot still makes it undoable.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.canvas.clear()?;
        self.record()?;
        self.needs_redraw = true;
        Ok(())
    }

    /// The snapshot history (read-only).
    pub fn history(&self) -> &History {
        &self.history
    }

    // ------------------------------------------------------------------
    // Canvas
    // ------------------------------------------------------------------

    /// The canvas surface (read-only, e.g. for export compositing).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Reads back a single canvas pixel.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Pixel, SessionError> {
        Ok(self.canvas.pixel(x, y)?)
    }

    /// Replaces the canvas with a blank surface of the new size.
    ///
    /// Content is not carried across a resize; history is kept so earlier
    /// states remain restorable.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SessionError> {
        self.canvas = Canvas::new(width, height)?;
        self.stroke = StrokeState::Idle;
        self.needs_redraw = true;
        log::info!("Canvas resized to {width}x{height}");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Notices and pending driver actions
    // ------------------------------------------------------------------

    /// Posts a transient notice, replacing any current one.
    pub fn post_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            posted_at: Instant::now(),
        });
        self.needs_redraw = true;
    }

    /// The notice text to display at `now`, if one is still active.
    pub fn active_notice(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.is_active(now))
            .map(Notice::text)
    }

    pub(crate) fn request_export(&mut self) {
        self.pending_export = true;
    }

    /// Takes and clears a pending export request.
    ///
    /// Export needs config and file IO, so the driver handles it; the
    /// session only raises the flag (e.g. on Ctrl+S).
    pub fn take_export_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    pub(crate) fn request_clear(&mut self) {
        self.pending_clear = true;
    }

    /// Takes and clears a pending clear request.
    ///
    /// Clearing is destructive, so the driver asks the user for confirmation
    /// and then calls [`Session::clear`] itself.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_clear)
    }

    /// Look up an action for the given key string and current modifiers.
    pub(crate) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }
}
