//! Page, section and focus handlers

use dsa_content::Page;
use tracing::debug;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_page(state: &mut AppState, page: Page) -> UpdateResult {
    state.switch_page(page);
    UpdateResult::none()
}

/// Unknown ids leave the page untouched
pub fn handle_select_section(state: &mut AppState, id: &str) -> UpdateResult {
    let changed = state.view_mut().select_section_id(id);
    after_section_select(state, changed)
}

pub fn handle_select_section_index(state: &mut AppState, index: usize) -> UpdateResult {
    let changed = state.view_mut().select_section_index(index);
    after_section_select(state, changed)
}

pub fn handle_next_section(state: &mut AppState) -> UpdateResult {
    let changed = state.view_mut().next_section();
    after_section_select(state, changed)
}

pub fn handle_prev_section(state: &mut AppState) -> UpdateResult {
    let changed = state.view_mut().prev_section();
    after_section_select(state, changed)
}

fn after_section_select(state: &mut AppState, changed: bool) -> UpdateResult {
    if changed {
        debug!(
            "Section {} on {}",
            state.view().active_section().id,
            state.page
        );
        state.on_section_changed();
    }
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.focus_next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.focus_prev();
    UpdateResult::none()
}
