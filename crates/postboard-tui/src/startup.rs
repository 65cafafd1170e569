//! Startup for the TUI runner
//!
//! The user list is requested once, before the first frame; nothing else is
//! fetched until the operator chooses a user.

use postboard_app::state::{AppState, Focus};
use postboard_app::UpdateAction;
use postboard_core::prelude::*;

/// Prepare the initial state and return the actions to dispatch at startup
pub fn startup(state: &mut AppState) -> Vec<UpdateAction> {
    info!("Using data service at {}", state.settings.api.base_url);
    state.focus = Focus::UserSelector;
    vec![UpdateAction::FetchUsers]
}
