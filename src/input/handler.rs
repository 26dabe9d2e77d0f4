//! Stateful key handler.
//!
//! Digits drive game commands so that every letter stays available for the
//! code field. The code buffer mirrors the original's text field: each edit
//! reports the full current content so the runner can feed it to
//! `SpinEngine::set_code` per keystroke.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// What a key press produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A game command.
    Action(GameAction),
    /// The code buffer content changed.
    CodeChanged,
    /// The player asked to leave.
    Quit,
}

#[derive(Debug, Default)]
pub struct InputHandler {
    code: String,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of the code field.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Map a key press. Returns None for keys with no meaning.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if key.code == KeyCode::Esc {
            return Some(InputEvent::Quit);
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(InputEvent::Quit);
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(InputEvent::Action(GameAction::Spin)),
            KeyCode::Char('1') => Some(InputEvent::Action(GameAction::SelectNormal)),
            KeyCode::Char('2') => Some(InputEvent::Action(GameAction::SelectMaster)),
            KeyCode::Char('0') => Some(InputEvent::Action(GameAction::Clear)),
            KeyCode::Backspace => {
                if self.code.pop().is_some() {
                    Some(InputEvent::CodeChanged)
                } else {
                    None
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.code.push(c);
                Some(InputEvent::CodeChanged)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_and_enter_spin() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_key(press(KeyCode::Char(' '))),
            Some(InputEvent::Action(GameAction::Spin))
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Enter)),
            Some(InputEvent::Action(GameAction::Spin))
        );
    }

    #[test]
    fn digits_select_difficulty_and_clear() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_key(press(KeyCode::Char('1'))),
            Some(InputEvent::Action(GameAction::SelectNormal))
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Char('2'))),
            Some(InputEvent::Action(GameAction::SelectMaster))
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Char('0'))),
            Some(InputEvent::Action(GameAction::Clear))
        );
    }

    #[test]
    fn letters_accumulate_into_the_code_buffer() {
        let mut input = InputHandler::new();
        for c in ['C', 'o', 'd', 'e'] {
            assert_eq!(
                input.handle_key(press(KeyCode::Char(c))),
                Some(InputEvent::CodeChanged)
            );
        }
        assert_eq!(input.code(), "Code");
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let mut input = InputHandler::new();
        input.handle_key(press(KeyCode::Char('C')));
        input.handle_key(press(KeyCode::Char('x')));

        assert_eq!(
            input.handle_key(press(KeyCode::Backspace)),
            Some(InputEvent::CodeChanged)
        );
        assert_eq!(input.code(), "C");

        input.handle_key(press(KeyCode::Backspace));
        // Backspace on an empty buffer reports nothing.
        assert_eq!(input.handle_key(press(KeyCode::Backspace)), None);
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Char('5'))), None);
        assert_eq!(input.handle_key(press(KeyCode::Tab)), None);
        assert_eq!(input.code(), "");
    }
}
