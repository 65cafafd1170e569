//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use postboard_app::actions::handle_action;
use postboard_app::config::Settings;
use postboard_app::message::Message;
use postboard_app::process::process_message;
use postboard_app::signals;
use postboard_app::state::AppState;
use postboard_client::{ApiClient, DataSource};
use postboard_core::prelude::*;

use super::{event, render, startup, terminal};

/// Run the TUI against the data service named in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings.api.base_url)?;
    info!("Data service: {}", client.base_url());

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);

    // Network completions and OS signals arrive on this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    for action in startup::startup(&mut state) {
        handle_action(action, msg_tx.clone(), &client);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    ratatui::restore();
    info!("Postboard exiting");

    result
}

/// Main event loop
fn run_loop<D>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: &D,
) -> Result<()>
where
    D: DataSource + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from background tasks and signals (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, source);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, source);
        }
    }

    Ok(())
}
