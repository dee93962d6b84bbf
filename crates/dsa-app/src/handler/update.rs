//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, navigation, problem, scroll, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPage(page) => navigation::handle_select_page(state, page),
        Message::NextPage => {
            let page = state.page.next();
            navigation::handle_select_page(state, page)
        }
        Message::PrevPage => {
            let page = state.page.prev();
            navigation::handle_select_page(state, page)
        }
        Message::SelectSection(id) => navigation::handle_select_section(state, &id),
        Message::SelectSectionIndex(index) => {
            navigation::handle_select_section_index(state, index)
        }
        Message::NextSection => navigation::handle_next_section(state),
        Message::PrevSection => navigation::handle_prev_section(state),
        Message::FocusNext => navigation::handle_focus_next(state),
        Message::FocusPrev => navigation::handle_focus_prev(state),

        // ─────────────────────────────────────────────────────────
        // Problem Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleSolution { problem } => problem::handle_toggle(state, problem),
        Message::SelectSubTab { problem, tab } => {
            problem::handle_select_sub_tab(state, problem, &tab)
        }
        Message::SelectLanguage { problem, label } => {
            problem::handle_select_language(state, problem, &label)
        }
        Message::NextLanguage { problem } => problem::handle_cycle_language(state, problem, true),
        Message::PrevLanguage { problem } => problem::handle_cycle_language(state, problem, false),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),
    }
}
