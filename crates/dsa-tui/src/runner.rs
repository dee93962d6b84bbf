//! Main TUI runner: terminal lifecycle and event loop

use dsa_app::{process_message, AppState, Message};
use dsa_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, signals, terminal};

/// Run the interactive guide until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    info!(
        "Starting TUI on page {} ({})",
        state.page,
        state.view().active_section().id
    );

    let mut term = terminal::init()?;

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    // The loop error, if any, wins over a failed restore
    let restored = terminal::restore();
    info!("TUI stopped");
    result.and(restored)
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
