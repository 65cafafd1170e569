//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every request runs on its own tokio task and reports back through the
//! message channel. The request id issued by the handler travels with the
//! completion message so stale responses can be dropped in `update`.

use tokio::sync::mpsc;

use crate::message::Message;
use crate::UpdateAction;
use postboard_client::DataSource;
use postboard_core::prelude::*;

/// Execute an action by spawning a background task
pub fn handle_action<D>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: &D)
where
    D: DataSource + Clone + Send + Sync + 'static,
{
    let source = source.clone();

    match action {
        UpdateAction::FetchUsers => {
            tokio::spawn(async move {
                let msg = match source.fetch_users().await {
                    Ok(users) => Message::UsersLoaded { users },
                    Err(e) => Message::UsersLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchPosts { request, user_id } => {
            debug!("Fetching posts of user {} (request {})", user_id, request.value());
            tokio::spawn(async move {
                let msg = match source.fetch_posts(user_id).await {
                    Ok(posts) => Message::PostsLoaded { request, posts },
                    Err(e) => Message::PostsLoadFailed {
                        request,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchComments { request, post_id } => {
            debug!(
                "Fetching comments of post {} (request {})",
                post_id,
                request.value()
            );
            tokio::spawn(async move {
                let msg = match source.fetch_comments(post_id).await {
                    Ok(comments) => Message::CommentsLoaded { request, comments },
                    Err(e) => Message::CommentsLoadFailed {
                        request,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::CreateComment { request, comment } => {
            tokio::spawn(async move {
                let msg = match source.create_comment(&comment).await {
                    Ok(comment) => Message::CommentCreated { request, comment },
                    Err(e) => Message::CommentCreateFailed {
                        request,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Deliver a completion; the loop may already have shut down
async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        debug!("Dropping completion, event loop closed: {:?}", e.0);
    }
}
