//! Keyboard mapping for the editor input
//!
//! Turns keydown events into widget messages. Hosts call [`key_to_msg`] for
//! every keydown on the input and suppress the browser default when
//! [`Key::suppresses_default`] says so.

use std::str::FromStr;

use crate::messages::{CaretMove, FormMsg, InputMsg, Msg};

/// Keys the input reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Char(char),
}

impl Key {
    /// Escape would otherwise bubble to the page and Tab would move focus
    /// before the submit happens
    pub fn suppresses_default(self) -> bool {
        matches!(self, Key::Escape | Key::Tab)
    }
}

impl FromStr for Key {
    type Err = String;

    /// Named keys as they appear in `KeyboardEvent.key`, or a single character
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Enter" | "Return" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => return Err(format!("Unknown key: {:?}", other)),
                }
            }
        };
        Ok(key)
    }
}

/// Map a keydown on the editor input to a message
pub fn key_to_msg(key: Key) -> Msg {
    match key {
        Key::Escape => InputMsg::Escape.into(),
        Key::Tab => InputMsg::Tab.into(),
        // Enter submits the enclosing form
        Key::Enter => FormMsg::Submit.into(),
        Key::Backspace => InputMsg::DeleteBackward.into(),
        Key::Delete => InputMsg::DeleteForward.into(),
        Key::Left => InputMsg::MoveCaret(CaretMove::Left).into(),
        Key::Right => InputMsg::MoveCaret(CaretMove::Right).into(),
        Key::Home => InputMsg::MoveCaret(CaretMove::Home).into(),
        Key::End => InputMsg::MoveCaret(CaretMove::End).into(),
        Key::Char(ch) => InputMsg::InsertChar(ch).into(),
    }
}
