//! OS signal handling
//!
//! Raw mode swallows Ctrl+C as a key event, but SIGINT/SIGTERM from outside
//! the terminal (`kill`, a closing tmux pane) still need to restore the
//! screen. Both become a [`Message::Quit`] on the event loop channel.

use tokio::sync::mpsc;

use crate::message::Message;
use postboard_core::prelude::*;

/// Spawn a task that turns the first termination signal into a quit message
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_termination_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if msg_tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone when {} arrived", name);
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

/// Resolve with the name of whichever termination signal arrives first
#[cfg(unix)]
async fn next_termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {name}: {e}")))
    };
    let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn next_termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {e}")))?;
    Ok("Ctrl+C")
}
