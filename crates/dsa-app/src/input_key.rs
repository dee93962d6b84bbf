//! Terminal-independent key events
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary so the
//! state crate never depends on a terminal library. Only the keys the guide
//! binds are represented.

/// A key press, already stripped of terminal-specific detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with the Ctrl modifier held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
        assert_eq!(InputKey::Char('q'), InputKey::Char('q'));
    }
}
