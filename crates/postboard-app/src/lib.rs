//! postboard-app - Application state and orchestration for Postboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the pure transition function. Network work is described
//! by [`UpdateAction`]s and executed by [`actions::handle_action`] against a
//! [`postboard_client::DataSource`].
//!
//! Component state lives in one module each and is owned by exactly one
//! parent:
//! - [`user_selector`] - dropdown visibility and highlight
//! - [`posts_list`] - cursor over the active user's posts
//! - [`post_details`] - comments of the open post, loading/error state
//! - [`comment_form`] - new comment fields and validation flags

pub mod actions;
pub mod comment_form;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod post_details;
pub mod posts_list;
pub mod process;
pub mod request;
pub mod signals;
pub mod state;
pub mod user_selector;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use request::{RequestGeneration, RequestId};
pub use state::{AppState, Focus, PostsPanel};
