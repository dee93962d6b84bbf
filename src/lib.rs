//! DSA Guide Library
//!
//! Entry points for the `dsa-guide` binary: the terminal UI and the
//! scriptable headless mode.

pub mod headless;

pub use headless::run_headless;

use dsa_app::AppState;
use dsa_core::prelude::*;

/// Run the terminal UI
pub async fn run(state: AppState) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("DSA Guide starting on page {}", state.page);
    info!("═══════════════════════════════════════════════════════");

    let result = dsa_tui::run(state).await;

    match &result {
        Err(e) if e.is_fatal() => error!("Terminal failure: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("DSA Guide exiting");
    result
}
