//! Normalized input handling.
//!
//! This module defines the event types drivers feed into the session, the
//! viewport-to-canvas coordinate mapping, and the pen/eraser tool selection.
//! Touch and mouse share one code path: both arrive as pointer events.

pub mod events;
pub mod mapper;
pub mod modifiers;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{InputEvent, Key};
pub use mapper::CanvasBounds;
pub use modifiers::Modifiers;
pub use tool::Tool;
