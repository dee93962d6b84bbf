//! Disclosure, sub-tab and language handlers
//!
//! An index past the mounted problems, an unknown tab name or an unknown
//! language label is ignored.

use tracing::trace;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_toggle(state: &mut AppState, problem: usize) -> UpdateResult {
    if let Some(view) = state.problem_mut(problem) {
        let revealed = view.toggle();
        trace!("Problem {} revealed={}", problem, revealed);
    }
    UpdateResult::none()
}

pub fn handle_select_sub_tab(state: &mut AppState, problem: usize, tab: &str) -> UpdateResult {
    if let Some(view) = state.problem_mut(problem) {
        if view.select_tab_named(tab) {
            trace!("Problem {} tab={}", problem, tab);
        }
    }
    UpdateResult::none()
}

pub fn handle_select_language(state: &mut AppState, problem: usize, label: &str) -> UpdateResult {
    if let Some(view) = state.problem_mut(problem) {
        if view.select_language(label) {
            trace!("Problem {} language={}", problem, label);
        }
    }
    UpdateResult::none()
}

pub fn handle_cycle_language(state: &mut AppState, problem: usize, forward: bool) -> UpdateResult {
    if let Some(view) = state.problem_mut(problem) {
        if forward {
            view.next_language();
        } else {
            view.prev_language();
        }
    }
    UpdateResult::none()
}
