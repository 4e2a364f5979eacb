//! Keybinding configuration types and parsing.
//!
//! Users can remap the keyboard shortcuts in config.toml. Each action takes a
//! list of binding strings like `"Ctrl+Z"` or `"E"`; modifiers may appear in
//! any order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Step back one history entry
    Undo,
    /// Step forward one history entry
    Redo,
    /// Switch to the pen tool
    ActivatePen,
    /// Switch to the eraser tool
    ActivateEraser,
    /// Request a PNG export (handled by the driver)
    Export,
    /// Request a canvas clear (driver confirms first)
    ClearCanvas,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Z" or "E".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty keybinding string".to_string());
        }

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key = None;

        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                "" => {}
                _ => {
                    if key.replace(part.to_string()).is_some() {
                        return Err(format!("more than one key in binding: {s}"));
                    }
                }
            }
        }

        match key {
            Some(key) => Ok(Self {
                key,
                ctrl,
                shift,
                alt,
            }),
            None => Err(format!("no key specified in: {s}")),
        }
    }

    /// Check whether this binding matches the pressed key and modifier state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// # Example TOML
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// activate_eraser = ["E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_activate_pen")]
    pub activate_pen: Vec<String>,

    #[serde(default = "default_activate_eraser")]
    pub activate_eraser: Vec<String>,

    #[serde(default = "default_export")]
    pub export: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            redo: default_redo(),
            activate_pen: default_activate_pen(),
            activate_eraser: default_activate_eraser(),
            export: default_export(),
            clear_canvas: default_clear_canvas(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    ///
    /// Returns an error if any binding string is invalid or if the same
    /// binding is assigned to two actions.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 6] = [
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.activate_pen, Action::ActivatePen),
            (&self.activate_eraser, Action::ActivateEraser),
            (&self.export, Action::Export),
            (&self.clear_canvas, Action::ClearCanvas),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(format!(
                        "duplicate keybinding '{binding_str}' assigned to both {existing:?} and {action:?}"
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybindings
// =============================================================================

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string()]
}

fn default_activate_pen() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_activate_eraser() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_export() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_modified_bindings() {
        let plain = KeyBinding::parse("E").unwrap();
        assert_eq!(plain.key, "E");
        assert!(!plain.ctrl && !plain.shift && !plain.alt);

        let combo = KeyBinding::parse("Ctrl + Shift + Z").unwrap();
        assert!(combo.ctrl && combo.shift && !combo.alt);
        assert_eq!(combo.key, "Z");
    }

    #[test]
    fn rejects_empty_and_keyless_bindings() {
        assert!(KeyBinding::parse("").is_err());
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
    }

    #[test]
    fn matching_ignores_key_case_but_not_modifiers() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert!(binding.matches("z", true, false, false));
        assert!(binding.matches("Z", true, false, false));
        assert!(!binding.matches("z", false, false, false));
        assert!(!binding.matches("z", true, true, false));
    }

    #[test]
    fn default_map_covers_all_shortcuts() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();
        let find = |key: &str, ctrl: bool| {
            map.iter()
                .find(|(b, _)| b.matches(key, ctrl, false, false))
                .map(|(_, a)| *a)
        };

        assert_eq!(find("z", true), Some(Action::Undo));
        assert_eq!(find("y", true), Some(Action::Redo));
        assert_eq!(find("p", false), Some(Action::ActivatePen));
        assert_eq!(find("e", false), Some(Action::ActivateEraser));
        assert_eq!(find("s", true), Some(Action::Export));
    }

    #[test]
    fn duplicate_bindings_are_rejected() {
        let config = KeybindingsConfig {
            undo: vec!["Ctrl+Z".to_string()],
            redo: vec!["Ctrl+Z".to_string()],
            ..Default::default()
        };
        assert!(config.build_action_map().is_err());
    }
}
