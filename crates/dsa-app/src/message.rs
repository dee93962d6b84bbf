//! Message types for the application (TEA pattern)

use dsa_content::Page;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
///
/// Problems are addressed by their 0-based index among the problems of the
/// mounted section. Ids and labels arrive as strings from the edges and are
/// resolved by the state layer; unknown ones change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Page and section navigation
    // ─────────────────────────────────────────────────────────
    SelectPage(Page),
    NextPage,
    PrevPage,

    /// Select a section of the current page by id
    SelectSection(String),
    /// Select a section by position (0-based)
    SelectSectionIndex(usize),
    NextSection,
    PrevSection,

    // ─────────────────────────────────────────────────────────
    // Problem interaction
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    ToggleSolution {
        problem: usize,
    },
    /// `"solution"` or `"approach"`
    SelectSubTab {
        problem: usize,
        tab: String,
    },
    SelectLanguage {
        problem: usize,
        label: String,
    },
    NextLanguage {
        problem: usize,
    },
    PrevLanguage {
        problem: usize,
    },

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    ToggleHelp,

    /// Quit immediately
    Quit,

    /// Periodic tick from the event poller
    Tick,
}
