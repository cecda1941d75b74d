//! Abstract input key event, independent of terminal library.
//!
//! Converted from `crossterm::event::KeyEvent` at the TUI boundary so the
//! app crate never depends on crossterm.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (letters, digits, symbols)
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Digit value for `'0'..='9'`.
    pub fn digit(&self) -> Option<u32> {
        match self {
            InputKey::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_digit() {
        assert_eq!(InputKey::Char('7').digit(), Some(7));
        assert_eq!(InputKey::Char('x').digit(), None);
        assert_eq!(InputKey::F(3).digit(), None);
    }
}
