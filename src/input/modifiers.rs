//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which modifier keys are currently pressed. Consulted when matching
/// keybindings (e.g. Ctrl+Z for undo, Ctrl+S for export).
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Shift key pressed
    pub shift: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }
}
