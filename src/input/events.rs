//! Normalized input event types.
//!
//! Mouse and touch input arrive through the same sum type; a driver maps its
//! native events (including the first touch point of a touch gesture) into
//! these variants, so there is no synthetic-event forwarding between paths.

use serde::{Deserialize, Serialize};

/// Generic key representation.
///
/// Drivers map their native key codes to these values for unified handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Ctrl modifier
    Ctrl,
    /// Shift modifier
    Shift,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

/// A normalized input event.
///
/// Pointer coordinates are in viewport space; the session maps them to
/// canvas-local coordinates via [`CanvasBounds`](super::CanvasBounds).
/// `PointerUp` covers both button release and the pointer leaving the canvas,
/// since either terminates an active stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed at viewport coordinates
    PointerDown { x: f64, y: f64 },
    /// Pointer moved while (possibly) stroking
    PointerMove { x: f64, y: f64 },
    /// Pointer released or left the canvas
    PointerUp,
    /// Key pressed
    KeyPress { key: Key },
    /// Key released (tracked for modifier state)
    KeyRelease { key: Key },
}
