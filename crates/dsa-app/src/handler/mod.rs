//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping
//! - `navigation`: Page, section and focus handlers
//! - `problem`: Disclosure, sub-tab and language handlers
//! - `scroll`: Content pane scroll handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod problem;
pub(crate) mod scroll;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::state::AppState;

pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Run a message and every follow-up it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}
