//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused element
//! - `selection`: User selection, posts loading, opening/closing posts
//! - `comments`: Comments loading and the new comment form

pub(crate) mod comments;
pub(crate) mod keys;
pub(crate) mod selection;
pub(crate) mod update;


use crate::message::Message;
use crate::request::RequestId;
use postboard_core::NewComment;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `GET /users` (once, at startup)
    FetchUsers,

    /// `GET /posts?userId=…` for the newly selected user
    FetchPosts { request: RequestId, user_id: i64 },

    /// `GET /comments?postId=…` for the newly opened post
    FetchComments { request: RequestId, post_id: i64 },

    /// `POST /comments`
    ///
    /// `request` is the post details generation at submit time; the result is
    /// dropped if a different post has been opened since.
    CreateComment {
        request: RequestId,
        comment: NewComment,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
