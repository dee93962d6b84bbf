//! dsa-tui - Terminal UI for DSA Guide
//!
//! Renders the tutorial pages with ratatui, translates crossterm key events
//! into [`dsa_app::Message`]s and drives the update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
