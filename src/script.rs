//! Replay scripts: JSON event sequences fed to a session from the CLI.
//!
//! A script is a JSON array of tagged events. Pointer and keyboard entries
//! carry a normalized [`InputEvent`]; the remaining entries drive the
//! controls a windowed front end would expose (color picker, size slider,
//! palette swatches, clear button, window resize).
//!
//! ```json
//! [
//!   {"op": "set_color", "color": "#ff6600"},
//!   {"op": "input", "event": {"type": "pointer_down", "x": 10.0, "y": 10.0}},
//!   {"op": "input", "event": {"type": "pointer_up"}}
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::{InputEvent, Tool};

/// Errors from loading a replay script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry in a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// A normalized pointer or keyboard event
    Input { event: InputEvent },
    /// Set the pen color by name or #RRGGBB hex
    SetColor { color: String },
    /// Set the brush diameter in pixels
    SetBrushSize { size: u32 },
    /// Select a palette swatch by index
    SelectSwatch { index: usize },
    /// Switch the active tool
    SetTool { tool: Tool },
    /// Clear the canvas (replay scripts skip the confirmation step)
    Clear,
    /// Resize the canvas, discarding its contents
    Resize { width: i32, height: i32 },
}

/// Loads and parses a replay script from a JSON file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let contents = fs::read_to_string(path)?;
    let events = serde_json::from_str(&contents)?;
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use std::io::Write;

    #[test]
    fn parses_tagged_events() {
        let json = r#"[
            {"op": "set_color", "color": "red"},
            {"op": "set_brush_size", "size": 12},
            {"op": "input", "event": {"type": "pointer_down", "x": 5.0, "y": 6.0}},
            {"op": "input", "event": {"type": "pointer_up"}},
            {"op": "input", "event": {"type": "key_press", "key": {"char": "e"}}},
            {"op": "select_swatch", "index": 3},
            {"op": "set_tool", "tool": "eraser"},
            {"op": "clear"},
            {"op": "resize", "width": 640, "height": 480}
        ]"#;

        let events: Vec<ScriptEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 9);
        assert_eq!(
            events[0],
            ScriptEvent::SetColor {
                color: "red".to_string()
            }
        );
        assert_eq!(
            events[2],
            ScriptEvent::Input {
                event: InputEvent::PointerDown { x: 5.0, y: 6.0 }
            }
        );
        assert_eq!(
            events[4],
            ScriptEvent::Input {
                event: InputEvent::KeyPress {
                    key: Key::Char('e')
                }
            }
        );
        assert_eq!(events[6], ScriptEvent::SetTool { tool: Tool::Eraser });
        assert_eq!(
            events[8],
            ScriptEvent::Resize {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn load_script_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"op": "input", "event": {{"type": "pointer_up"}}}}]"#
        )
        .unwrap();

        let events = load_script(file.path()).unwrap();
        assert_eq!(
            events,
            vec![ScriptEvent::Input {
                event: InputEvent::PointerUp
            }]
        );
    }

    #[test]
    fn rejects_unknown_ops() {
        let err = serde_json::from_str::<Vec<ScriptEvent>>(r#"[{"op": "explode"}]"#);
        assert!(err.is_err());
    }
}
