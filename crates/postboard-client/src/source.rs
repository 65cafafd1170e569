//! The data source seam
//!
//! The application dispatches every request through this trait so the
//! orchestration layer can be exercised without a network.

use postboard_core::prelude::*;
use postboard_core::{Comment, NewComment, Post, User};

/// Read users/posts/comments and create comments.
///
/// Implementations perform exactly one round trip per call and report every
/// failure through the returned [`Result`]; retry and staleness handling
/// belong to the caller.
#[trait_variant::make(DataSource: Send)]
pub trait LocalDataSource {
    /// `GET /users`
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// `GET /posts?userId={user_id}`
    async fn fetch_posts(&self, user_id: i64) -> Result<Vec<Post>>;

    /// `GET /comments?postId={post_id}`
    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>>;

    /// `POST /comments`, returning the record created by the service
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment>;
}
