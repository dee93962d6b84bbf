//! Scroll message handlers for the content pane

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.scroll.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.scroll.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.scroll.to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.scroll.to_bottom();
    UpdateResult::none()
}
