//! dsa-app - Interactive tutorial state for DSA Guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! guide's interactive core: the active section of a page, and for every
//! problem its revealed flag, sub-tab and code language. It also owns
//! configuration loading. Frontends (terminal UI, headless mode, website)
//! translate their input into [`Message`]s or call the component types
//! directly.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page_state;
pub mod problem;
pub mod router;
pub mod snapshot;
pub mod state;

// Re-export primary types
pub use handler::{process_message, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page_state::{mount_page, MountedSection, Node, PageState, PageView};
pub use problem::{
    CodeSnippetSelector, Disclosure, ProblemView, SolutionPanel, SolutionTab, SolutionTabs,
};
pub use router::SectionRouter;
pub use snapshot::{PanelSnapshot, ProblemSnapshot, Snapshot};
pub use state::{AppPhase, AppState, ScrollState};
