//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::problem::SolutionTab;
use crate::snapshot::Snapshot;
use dsa_content::Page;

fn strings_state() -> AppState {
    AppState::with_page(Page::Strings, Settings::default())
}

fn send(state: &mut AppState, msg: Message) {
    process_message(state, msg);
}

fn key(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn section(id: &str) -> Message {
    Message::SelectSection(id.to_string())
}

fn lang(problem: usize, label: &str) -> Message {
    Message::SelectLanguage {
        problem,
        label: label.to_string(),
    }
}

fn tab(problem: usize, name: &str) -> Message {
    Message::SelectSubTab {
        problem,
        tab: name.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Strings walkthrough
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_strings_palindrome_walkthrough() {
    let mut state = strings_state();
    assert_eq!(state.view().active_section().id, "fundamentals");

    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });

    let snap = Snapshot::capture(&state);
    let palindrome = snap.problem(0).unwrap();
    assert_eq!(palindrome.title, "1. Palindrome Check");
    assert_eq!(palindrome.tab(), Some(SolutionTab::Solution));
    assert_eq!(palindrome.language(), Some("JavaScript"));
    let code = palindrome.panel.as_ref().unwrap().code;
    assert!(code.contains("function isPalindrome"));

    send(&mut state, lang(0, "Java"));
    let snap = Snapshot::capture(&state);
    assert_eq!(snap.problem(0).unwrap().language(), Some("Java"));
    assert!(snap.problem(0).unwrap().panel.as_ref().unwrap().code.contains("public boolean"));

    send(&mut state, Message::ToggleSolution { problem: 0 });
    send(&mut state, Message::ToggleSolution { problem: 0 });
    let snap = Snapshot::capture(&state);
    assert_eq!(snap.problem(0).unwrap().language(), Some("JavaScript"));
    assert_eq!(snap.problem(0).unwrap().tab(), Some(SolutionTab::Solution));
}

// ─────────────────────────────────────────────────────────────────
// Invalid selections
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_section_is_noop() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });
    let before = Snapshot::capture(&state);

    send(&mut state, section("heaps"));
    assert_eq!(Snapshot::capture(&state), before);
}

#[test]
fn test_unknown_language_is_noop() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });
    send(&mut state, lang(0, "Python"));
    send(&mut state, lang(0, "Rust"));

    let snap = Snapshot::capture(&state);
    assert_eq!(snap.problem(0).unwrap().language(), Some("Python"));
}

#[test]
fn test_language_change_on_hidden_problem_is_noop() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, lang(0, "Java"));
    send(&mut state, Message::ToggleSolution { problem: 0 });

    let snap = Snapshot::capture(&state);
    assert_eq!(snap.problem(0).unwrap().language(), Some("JavaScript"));
}

#[test]
fn test_problem_index_out_of_range_is_noop() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    let before = Snapshot::capture(&state);

    send(&mut state, Message::ToggleSolution { problem: 99 });
    send(&mut state, tab(99, "approach"));
    assert_eq!(Snapshot::capture(&state), before);
}

#[test]
fn test_approach_tab_unavailable_without_approach() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    // "2. Reverse Words" has no approach
    send(&mut state, Message::ToggleSolution { problem: 1 });
    send(&mut state, tab(1, "approach"));

    let snap = Snapshot::capture(&state);
    let problem = snap.problem(1).unwrap();
    assert_eq!(problem.tab(), Some(SolutionTab::Solution));
    assert_eq!(problem.panel.as_ref().unwrap().tabs, vec![SolutionTab::Solution]);
}

#[test]
fn test_approach_tab_switches_when_available() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });
    send(&mut state, tab(0, "approach"));
    send(&mut state, tab(0, "hints"));

    let snap = Snapshot::capture(&state);
    assert_eq!(snap.problem(0).unwrap().tab(), Some(SolutionTab::Approach));
}

// ─────────────────────────────────────────────────────────────────
// Section lifecycle
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_problems_are_independent() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });
    send(&mut state, Message::ToggleSolution { problem: 2 });
    send(&mut state, lang(2, "Python"));

    let snap = Snapshot::capture(&state);
    assert_eq!(snap.problem(0).unwrap().language(), Some("JavaScript"));
    assert!(!snap.problem(1).unwrap().revealed);
    assert_eq!(snap.problem(2).unwrap().language(), Some("Python"));
}

#[test]
fn test_leaving_section_resets_its_problems() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });
    send(&mut state, section("two-pointers"));
    send(&mut state, section("basic-problems"));

    let snap = Snapshot::capture(&state);
    assert!(snap.problems.iter().all(|p| !p.revealed));
}

#[test]
fn test_reselecting_active_section_keeps_state() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::ToggleSolution { problem: 0 });
    send(&mut state, section("basic-problems"));

    assert!(state.problem(0).unwrap().is_revealed());
}

#[test]
fn test_section_change_resets_focus_and_scroll() {
    let mut state = strings_state();
    send(&mut state, section("basic-problems"));
    send(&mut state, Message::FocusNext);
    state.scroll.update_metrics(10, 100);
    send(&mut state, Message::PageDown);
    assert_eq!(state.focus, 1);
    assert!(state.scroll.offset > 0);

    send(&mut state, Message::NextSection);
    assert_eq!(state.focus, 0);
    assert_eq!(state.scroll.offset, 0);
}

#[test]
fn test_page_navigation_wraps() {
    let mut state = AppState::with_page(Page::Trees, Settings::default());
    send(&mut state, Message::NextPage);
    assert_eq!(state.page, Page::Frameworks);
    send(&mut state, Message::PrevPage);
    assert_eq!(state.page, Page::Trees);
}

// ─────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    for k in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut state = strings_state();
        key(&mut state, k);
        assert!(state.should_quit(), "{:?} should quit", k);
    }
}

#[test]
fn test_number_keys_select_section() {
    let mut state = strings_state();
    key(&mut state, InputKey::Char('2'));
    assert_eq!(state.view().active_section().id, "basic-problems");
    key(&mut state, InputKey::Char('9'));
    assert_eq!(state.view().active_section().id, "basic-problems");
}

#[test]
fn test_keyboard_walkthrough() {
    let mut state = strings_state();
    key(&mut state, InputKey::Tab);
    assert_eq!(state.view().active_section().id, "basic-problems");

    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Char(']'));
    key(&mut state, InputKey::Char(']'));
    assert_eq!(
        Snapshot::capture(&state).problem(0).unwrap().language(),
        Some("Java")
    );

    key(&mut state, InputKey::Char('a'));
    assert_eq!(state.problem(0).unwrap().active_tab(), Some(SolutionTab::Approach));
    key(&mut state, InputKey::Char('s'));
    assert_eq!(state.problem(0).unwrap().active_tab(), Some(SolutionTab::Solution));

    key(&mut state, InputKey::Char('j'));
    key(&mut state, InputKey::Char(' '));
    assert!(state.problem(1).unwrap().is_revealed());

    key(&mut state, InputKey::BackTab);
    assert_eq!(state.view().active_section().id, "fundamentals");
}

#[test]
fn test_enter_without_problems_does_nothing() {
    let state = strings_state();
    assert_eq!(handle_key(&state, InputKey::Enter), None);
    assert_eq!(handle_key(&state, InputKey::Char(']')), None);
}

#[test]
fn test_help_overlay_captures_keys() {
    let mut state = strings_state();
    key(&mut state, InputKey::Char('?'));
    assert!(state.show_help);

    key(&mut state, InputKey::Tab);
    assert_eq!(state.view().active_section().id, "fundamentals");

    key(&mut state, InputKey::Esc);
    assert!(!state.show_help);
    assert!(!state.should_quit());
}

#[test]
fn test_key_produces_follow_up_message() {
    let mut state = strings_state();
    let result = update(&mut state, Message::Key(InputKey::Char('p')));
    assert_eq!(result.message, Some(Message::NextPage));
    assert_eq!(state.page, Page::Strings);
}
