//! Test helpers: an in-memory [`DataSource`]
//!
//! Available to other crates through the `test-helpers` feature.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use postboard_core::prelude::*;
use postboard_core::{Comment, NewComment, Post, User};

use crate::source::DataSource;

/// A call recorded by [`StubDataSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubCall {
    FetchUsers,
    FetchPosts(i64),
    FetchComments(i64),
    CreateComment(NewComment),
}

/// Which operation a [`StubDataSource`] should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubFailure {
    Users,
    Posts,
    Comments,
    CreateComment,
}

#[derive(Debug, Default)]
struct StubData {
    users: Vec<User>,
    posts: HashMap<i64, Vec<Post>>,
    comments: HashMap<i64, Vec<Comment>>,
    failures: HashSet<StubFailure>,
    next_comment_id: i64,
    calls: Vec<StubCall>,
}

/// Canned, in-memory data source that records every call.
///
/// Clones share the same data, so a test can keep one handle and give
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct StubDataSource {
    inner: Arc<Mutex<StubData>>,
}

impl StubDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.data().users = users;
        self
    }

    pub fn with_posts(self, user_id: i64, posts: Vec<Post>) -> Self {
        self.data().posts.insert(user_id, posts);
        self
    }

    pub fn with_comments(self, post_id: i64, comments: Vec<Comment>) -> Self {
        self.data().comments.insert(post_id, comments);
        self
    }

    /// Id assigned to the next created comment
    pub fn with_next_comment_id(self, id: i64) -> Self {
        self.data().next_comment_id = id;
        self
    }

    pub fn failing(self, failure: StubFailure) -> Self {
        self.data().failures.insert(failure);
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<StubCall> {
        self.data().calls.clone()
    }

    fn data(&self) -> std::sync::MutexGuard<'_, StubData> {
        self.inner.lock().expect("stub data source lock poisoned")
    }
}

impl DataSource for StubDataSource {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let mut data = self.data();
        data.calls.push(StubCall::FetchUsers);
        if data.failures.contains(&StubFailure::Users) {
            return Err(Error::request("GET /users: HTTP 500 Internal Server Error"));
        }
        Ok(data.users.clone())
    }

    async fn fetch_posts(&self, user_id: i64) -> Result<Vec<Post>> {
        let mut data = self.data();
        data.calls.push(StubCall::FetchPosts(user_id));
        if data.failures.contains(&StubFailure::Posts) {
            return Err(Error::request("GET /posts: HTTP 500 Internal Server Error"));
        }
        Ok(data.posts.get(&user_id).cloned().unwrap_or_default())
    }

    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        let mut data = self.data();
        data.calls.push(StubCall::FetchComments(post_id));
        if data.failures.contains(&StubFailure::Comments) {
            return Err(Error::request("GET /comments: HTTP 500 Internal Server Error"));
        }
        Ok(data.comments.get(&post_id).cloned().unwrap_or_default())
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        let mut data = self.data();
        data.calls.push(StubCall::CreateComment(comment.clone()));
        if data.failures.contains(&StubFailure::CreateComment) {
            return Err(Error::request("POST /comments: HTTP 500 Internal Server Error"));
        }
        let id = data.next_comment_id;
        data.next_comment_id += 1;
        let created = Comment {
            id,
            post_id: comment.post_id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
        };
        data.comments
            .entry(comment.post_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }
}
