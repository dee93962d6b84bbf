//! Widget components for the TUI

pub mod content;
mod header;
mod help;
mod problem_card;
mod section_tabs;
mod status_bar;
pub mod text;

pub use content::{build as build_content, ContentLines};
pub use header::MainHeader;
pub use help::{centered_rect, HelpOverlay};
pub use problem_card::ProblemCard;
pub use section_tabs::SectionTabs;
pub use status_bar::StatusBar;
