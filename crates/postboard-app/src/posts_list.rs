//! Posts list state
//!
//! The list itself is stateless apart from the keyboard cursor; which row is
//! "open" is derived from the post selected in
//! [`AppState`](crate::state::AppState).

use postboard_core::Post;

#[derive(Debug, Clone, Default)]
pub struct PostsListState {
    /// Index of the row under the keyboard cursor
    pub cursor: usize,
}

impl PostsListState {
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// The post under the cursor
    pub fn current<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        posts.get(self.cursor)
    }
}

/// Whether `post` is the one shown in the sidebar
pub fn is_open(post: &Post, open: Option<&Post>) -> bool {
    open.is_some_and(|p| p.id == post.id)
}

/// Label of the row's toggle button
pub fn button_label(post: &Post, open: Option<&Post>) -> &'static str {
    if is_open(post, open) {
        "Close"
    } else {
        "Open"
    }
}
