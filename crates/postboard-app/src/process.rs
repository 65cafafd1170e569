//! Message processing
//!
//! Runs one message through the TEA update loop, following up messages until
//! none remain and handing every resulting action to the action dispatcher.

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use postboard_client::DataSource;

/// Process a message through the TEA update function
pub fn process_message<D>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &D,
) where
    D: DataSource + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source);
        }

        msg = result.message;
    }
}
