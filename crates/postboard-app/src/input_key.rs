//! Abstract input key event, independent of terminal library.
//!
//! Keeps postboard-app free of crossterm types; the TUI converts its key
//! events into [`InputKey`] at the boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
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
}

impl InputKey {
    /// Whether this key types a printable character into a text field
    pub fn is_printable(&self) -> bool {
        matches!(self, InputKey::Char(c) if !c.is_control())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_printable_keys() {
        assert!(InputKey::Char('x').is_printable());
        assert!(InputKey::Char(' ').is_printable());
        assert!(!InputKey::CharCtrl('u').is_printable());
        assert!(!InputKey::Enter.is_printable());
    }
}
