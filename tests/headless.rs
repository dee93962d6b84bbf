//! Headless session tests driven through in-memory stdin/stdout

use std::io::Cursor;

use dsa_app::config::{self, Settings};
use dsa_app::AppState;
use dsa_content::Page;
use dsa_guide::headless::run_session;
use serde_json::Value;

fn run(page: Page, settings: Settings, input: &str) -> (AppState, Vec<Value>) {
    let mut state = AppState::with_page(page, settings);
    let mut out = Vec::new();
    run_session(&mut state, Cursor::new(input), &mut out).expect("session failed");

    let events = String::from_utf8(out)
        .expect("utf8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    (state, events)
}

fn strings(input: &str) -> Vec<Value> {
    run(Page::Strings, Settings::default(), input).1
}

#[test]
fn test_ready_event_first() {
    let events = strings("");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "ready");
    assert_eq!(events[0]["state"]["page"], "strings");
    assert_eq!(events[0]["state"]["active_section"], "fundamentals");
    assert_eq!(events[0]["state"]["sections"].as_array().unwrap().len(), 6);
}

#[test]
fn test_palindrome_walkthrough() {
    let events = strings(
        "section basic-problems\n\
         toggle 0\n\
         lang 0 Java\n\
         toggle 0\n\
         toggle 0\n",
    );
    assert_eq!(events.len(), 6);

    let revealed = &events[2]["state"]["problems"][0];
    assert_eq!(revealed["title"], "1. Palindrome Check");
    assert_eq!(revealed["revealed"], true);
    assert_eq!(revealed["panel"]["tab"], "solution");
    assert_eq!(revealed["panel"]["language"], "JavaScript");
    assert_eq!(
        revealed["panel"]["languages"],
        serde_json::json!(["JavaScript", "Python", "Java"])
    );
    assert!(revealed["panel"]["code"]
        .as_str()
        .unwrap()
        .contains("function isPalindrome"));

    let java = &events[3]["state"]["problems"][0];
    assert_eq!(java["panel"]["language"], "Java");

    let hidden = &events[4]["state"]["problems"][0];
    assert_eq!(hidden["revealed"], false);
    assert!(hidden.get("panel").is_none());

    let reopened = &events[5]["state"]["problems"][0];
    assert_eq!(reopened["panel"]["language"], "JavaScript");
    assert_eq!(reopened["panel"]["tab"], "solution");
}

#[test]
fn test_each_command_emits_one_snapshot() {
    let events = strings("state\n\nsection two-pointers\nstate\n");
    let kinds: Vec<_> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["ready", "snapshot", "snapshot", "snapshot"]);
    assert_eq!(events[2]["command"], "section");
    assert_eq!(events[3]["state"]["active_section"], "two-pointers");
}

#[test]
fn test_malformed_line_reports_error_and_keeps_state() {
    let events = strings("section basic-problems\ntoggle first\nfly away\nstate\n");

    assert_eq!(events[2]["event"], "error");
    assert_eq!(events[2]["line"], "toggle first");
    assert_eq!(events[3]["event"], "error");
    assert_eq!(events[4]["event"], "snapshot");
    assert_eq!(events[4]["state"], events[1]["state"]);
}

#[test]
fn test_unknown_selection_is_silent() {
    let events =
        strings("section basic-problems\ntoggle 1\ntab 1 approach\nlang 1 Rust\nsection heaps\n");

    assert!(events.iter().all(|e| e["event"] != "error"));
    let last = &events[5]["state"];
    assert_eq!(last["active_section"], "basic-problems");
    // "2. Reverse Words" has no approach
    assert_eq!(last["problems"][1]["panel"]["tab"], "solution");
    assert_eq!(
        last["problems"][1]["panel"]["tabs"],
        serde_json::json!(["solution"])
    );
    assert_eq!(last["problems"][1]["panel"]["language"], "JavaScript");
}

#[test]
fn test_page_switch_and_unknown_page() {
    let events = strings("page trees\npage heaps\n");
    assert_eq!(events[1]["state"]["page"], "trees");
    assert_eq!(events[1]["state"]["active_section"], "fundamentals");
    assert_eq!(events[2]["event"], "error");
}

#[test]
fn test_quit_stops_reading() {
    let (state, events) = run(Page::Strings, Settings::default(), "quit\nsection practice\n");
    assert!(state.should_quit());
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["command"], "quit");
    assert_eq!(events[1]["state"]["active_section"], "fundamentals");
}

#[test]
fn test_config_file_drives_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dsa-guide").join("config.toml");
    assert!(config::init_config(&path).unwrap());

    let mut settings = config::load_settings(&path);
    assert_eq!(settings.ui.start_page, Page::Frameworks);
    settings.code.fallback_language = "TypeScript".to_string();
    config::save_settings(&path, &settings).unwrap();

    let settings = config::load_settings(&path);
    let (_, events) = run(
        settings.ui.start_page,
        settings,
        "section practice\ntoggle 1\n",
    );
    let single = &events[2]["state"]["problems"][1];
    assert_eq!(single["title"], "Search Insert Position");
    assert_eq!(single["panel"]["language"], "TypeScript");
}

#[test]
fn test_unreadable_input_ends_session() {
    let mut state = AppState::with_page(Page::Strings, Settings::default());
    let mut out = Vec::new();
    let input = Cursor::new(b"state\n\xff\xfe\nstate\n".to_vec());

    let err = run_session(&mut state, input, &mut out).unwrap_err();
    assert!(matches!(err, dsa_core::Error::Io(_)));
    assert!(!err.is_recoverable());

    // ready plus the snapshot for the first line, nothing after the bad one
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
}
