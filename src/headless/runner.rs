//! Headless mode runner - command loop without the TUI

use std::io::{self, BufRead, Write};

use dsa_app::{process_message, AppState, Snapshot};
use dsa_core::prelude::*;

use super::{Command, HeadlessEvent};

/// Run in headless mode on stdin and stdout
pub async fn run_headless(state: AppState) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("DSA Guide starting in HEADLESS mode on page {}", state.page);
    info!("═══════════════════════════════════════════════════════");

    // stdin reads block, so the loop runs off the async workers
    let result = tokio::task::spawn_blocking(move || {
        let mut state = state;
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(&mut state, stdin.lock(), &mut stdout)
    })
    .await
    .map_err(io::Error::other)?;

    info!("DSA Guide headless mode exiting");
    result
}

/// Process commands from `input` until it ends or `quit` is read
///
/// Emits `ready` first, then one `snapshot` per applied command or one
/// `error` per malformed line.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    out: &mut W,
) -> Result<()> {
    HeadlessEvent::ready(Snapshot::capture(state))
        .write_to(out)
        .context("Failed to write ready event")?;

    for line in input.lines() {
        let line = line.context("Failed to read headless input")?;

        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => {
                debug!("Headless command: {:?}", command);
                if let Some(message) = command.to_message() {
                    process_message(state, message);
                }
                HeadlessEvent::snapshot(command.name(), Snapshot::capture(state))
                    .write_to(out)
                    .context("Failed to write snapshot event")?;
            }
            Err(e) if e.is_recoverable() => {
                warn!("Rejected headless input {:?}: {}", line, e);
                HeadlessEvent::error(e.to_string(), line.trim())
                    .write_to(out)
                    .context("Failed to write error event")?;
            }
            Err(e) => return Err(e),
        }

        if state.should_quit() {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}
