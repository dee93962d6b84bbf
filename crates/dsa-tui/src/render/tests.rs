//! Full-frame rendering tests
//!
//! The `snapshot_*` tests capture the whole screen and compare it against
//! golden snapshots using insta. Sizes are chosen so the content fits
//! without a scrollbar.

use super::*;
use crate::test_utils::TestTerminal;
use insta::assert_snapshot;
use dsa_app::config::Settings;
use dsa_app::{process_message, Message};
use dsa_content::Page;

fn strings_state() -> AppState {
    AppState::with_page(Page::Strings, Settings::default())
}

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_renders_chrome_and_first_section() {
    let mut term = TestTerminal::with_size(120, 30);
    let mut state = strings_state();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("DSA Guide"), "{}", term.content());
    assert!(term.buffer_contains("Strings · "));
    assert!(term.buffer_contains("Fundamentals"));
    assert!(term.buffer_contains("no problems"));
}

#[test]
fn test_reveal_shows_code() {
    let mut term = TestTerminal::with_size(120, 40);
    let mut state = strings_state();
    process_message(&mut state, Message::SelectSection("basic-problems".into()));
    draw(&mut term, &mut state);
    assert!(!term.buffer_contains("function isPalindrome"));

    process_message(&mut state, Message::ToggleSolution { problem: 0 });
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Hide solution"));
    assert!(term.buffer_contains("function isPalindrome"), "{}", term.content());
}

#[test]
fn test_render_reports_scroll_metrics() {
    let mut term = TestTerminal::new();
    let mut state = strings_state();
    draw(&mut term, &mut state);

    // 24 rows: header 3, tabs 1, status 1, content borders 2
    assert_eq!(state.scroll.viewport, 17);
    assert!(state.scroll.content_height > 0);
}

#[test]
fn test_focus_scrolls_problem_into_view() {
    let mut term = TestTerminal::with_size(80, 16);
    let mut state = strings_state();
    process_message(&mut state, Message::SelectSection("basic-problems".into()));
    draw(&mut term, &mut state);

    process_message(&mut state, Message::FocusNext);
    process_message(&mut state, Message::FocusNext);
    draw(&mut term, &mut state);

    assert!(!state.scroll.follow_focus);
    assert!(state.scroll.offset > 0);
    assert!(term.buffer_contains("3. Valid Anagram"), "{}", term.content());
}

#[test]
fn test_help_overlay_drawn_on_top() {
    let mut term = TestTerminal::new();
    let mut state = strings_state();
    process_message(&mut state, Message::ToggleHelp);
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Keys"));
    assert!(term.buffer_contains("Jump to section"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut term = TestTerminal::with_size(10, 4);
    let mut state = strings_state();
    draw(&mut term, &mut state);
}

// ─────────────────────────────────────────────────────────────────
// Golden snapshots
// ─────────────────────────────────────────────────────────────────

fn basic_problems_revealed() -> AppState {
    let mut state = strings_state();
    process_message(&mut state, Message::SelectSection("basic-problems".into()));
    process_message(&mut state, Message::ToggleSolution { problem: 0 });
    state
}

#[test]
fn snapshot_strings_fundamentals() {
    let mut term = TestTerminal::with_size(80, 40);
    let mut state = strings_state();
    draw(&mut term, &mut state);
    assert_snapshot!("strings_fundamentals", term.content());
}

#[test]
fn snapshot_strings_problem_revealed() {
    let mut term = TestTerminal::with_size(80, 50);
    let mut state = basic_problems_revealed();
    draw(&mut term, &mut state);
    assert_eq!(state.scroll.offset, 0);
    assert_snapshot!("strings_problem_revealed", term.content());
}

#[test]
fn snapshot_strings_approach_tab() {
    let mut term = TestTerminal::with_size(80, 40);
    let mut state = basic_problems_revealed();
    process_message(
        &mut state,
        Message::SelectSubTab {
            problem: 0,
            tab: "approach".into(),
        },
    );
    draw(&mut term, &mut state);
    assert_snapshot!("strings_approach_tab", term.content());
}

#[test]
fn snapshot_help_overlay() {
    let mut term = TestTerminal::with_size(80, 40);
    let mut state = strings_state();
    process_message(&mut state, Message::ToggleHelp);
    draw(&mut term, &mut state);
    assert_snapshot!("help_overlay", term.content());
}
