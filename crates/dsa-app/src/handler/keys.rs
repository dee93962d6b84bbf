//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key event to a message based on the current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.show_help {
        handle_key_help(key)
    } else {
        handle_key_normal(state, key)
    }
}

/// Help overlay swallows everything except closing it and quitting
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('?') | InputKey::Esc => Some(Message::ToggleHelp),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let problem = state.focus;
    let has_problem = state.focused_problem().is_some();

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('?') => Some(Message::ToggleHelp),

        // Pages
        InputKey::Char('p') => Some(Message::NextPage),
        InputKey::Char('P') => Some(Message::PrevPage),

        // Sections
        InputKey::Tab | InputKey::Right => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevSection),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectSectionIndex(index))
        }

        // Problem focus
        InputKey::Char('j') | InputKey::Down => Some(Message::FocusNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::FocusPrev),

        // Focused problem
        InputKey::Enter | InputKey::Char(' ') if has_problem => {
            Some(Message::ToggleSolution { problem })
        }
        InputKey::Char('s') if has_problem => Some(Message::SelectSubTab {
            problem,
            tab: "solution".to_string(),
        }),
        InputKey::Char('a') if has_problem => Some(Message::SelectSubTab {
            problem,
            tab: "approach".to_string(),
        }),
        InputKey::Char(']') if has_problem => Some(Message::NextLanguage { problem }),
        InputKey::Char('[') if has_problem => Some(Message::PrevLanguage { problem }),

        // Scrolling
        InputKey::Char('J') => Some(Message::ScrollDown),
        InputKey::Char('K') => Some(Message::ScrollUp),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}
