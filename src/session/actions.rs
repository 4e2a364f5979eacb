//! Keyboard handling and action dispatch.

use super::core::{Session, SessionError};
use crate::config::Action;
use crate::input::Key;

impl Session {
    /// Handles a key press: modifier tracking first, then action lookup.
    pub(crate) async fn on_key_press(&mut self, key: Key) -> Result<(), SessionError> {
        let c = match key {
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return Ok(());
            }
            Key::Shift => {
                self.modifiers.shift = true;
                return Ok(());
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return Ok(());
            }
            Key::Unknown => return Ok(()),
            Key::Char(c) => c,
        };

        let key_str = c.to_string();
        if let Some(action) = self.find_action(&key_str) {
            log::debug!("Key '{key_str}' triggered {action:?}");
            self.handle_action(action).await?;
        }
        Ok(())
    }

    /// Executes a bound action.
    pub(crate) async fn handle_action(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Undo => {
                self.undo().await?;
            }
            Action::Redo => {
                self.redo().await?;
            }
            Action::ActivatePen => self.activate_pen(),
            Action::ActivateEraser => self.activate_eraser(),
            Action::Export => self.request_export(),
            Action::ClearCanvas => self.request_clear(),
        }
        Ok(())
    }

    /// Handles a key release, clearing modifier state.
    pub(crate) fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Shift => self.modifiers.shift = false,
            Key::Alt => self.modifiers.alt = false,
            Key::Char(_) | Key::Unknown => {}
        }
    }
}
