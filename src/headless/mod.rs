//! Headless mode - NDJSON state output driven by stdin commands
//!
//! Instead of drawing the terminal UI, the guide reads one command per line
//! and answers with one JSON event per line. This makes the interactive
//! state scriptable and easy to assert on in tests.
//!
//! # Commands
//!
//! ```text
//! page strings
//! section basic-problems
//! toggle 0
//! tab 0 approach
//! lang 0 Java
//! state
//! quit
//! ```
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","state":{"page":"strings",...},"timestamp":1704700001000}
//! {"event":"snapshot","command":"toggle","state":{...},"timestamp":1704700002000}
//! {"event":"error","message":"Invalid command: toggle needs a problem index","line":"toggle","timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

pub use command::Command;
pub use runner::{run_headless, run_session};

use std::io::Write;

use chrono::Utc;
use dsa_app::Snapshot;
use dsa_core::prelude::*;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Session started, with the initial state
    Ready { state: Snapshot, timestamp: i64 },

    /// State after a command was applied
    Snapshot {
        command: &'static str,
        state: Snapshot,
        timestamp: i64,
    },

    /// A line could not be parsed; nothing changed
    Error {
        message: String,
        line: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    pub fn ready(state: Snapshot) -> Self {
        Self::Ready {
            state,
            timestamp: Self::now(),
        }
    }

    pub fn snapshot(command: &'static str, state: Snapshot) -> Self {
        Self::Snapshot {
            command,
            state,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, line: &str) -> Self {
        Self::Error {
            message,
            line: line.to_string(),
            timestamp: Self::now(),
        }
    }

    /// Write this event as one JSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_app::config::Settings;
    use dsa_app::AppState;
    use dsa_content::Page;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.write_to(&mut buf).expect("write failed");
        assert_eq!(buf.last(), Some(&b'\n'));
        serde_json::from_slice(&buf).expect("invalid JSON")
    }

    #[test]
    fn test_ready_serialization() {
        let state = AppState::with_page(Page::Strings, Settings::default());
        let value = to_value(&HeadlessEvent::ready(Snapshot::capture(&state)));

        assert_eq!(value["event"], "ready");
        assert_eq!(value["state"]["page"], "strings");
        assert_eq!(value["state"]["active_section"], "fundamentals");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = AppState::with_page(Page::Trees, Settings::default());
        let value = to_value(&HeadlessEvent::snapshot(
            "section",
            Snapshot::capture(&state),
        ));

        assert_eq!(value["event"], "snapshot");
        assert_eq!(value["command"], "section");
        assert_eq!(value["state"]["page"], "trees");
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("bad".to_string(), "toggle x"));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "bad");
        assert_eq!(value["line"], "toggle x");
        assert!(value["timestamp"].is_number());
    }
}
