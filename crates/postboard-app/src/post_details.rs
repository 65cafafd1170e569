//! Post details state
//!
//! Owns the comments of the open post, its own loading/error state, and the
//! embedded [`CommentFormState`]. Whether the form is visible is decided by
//! the root (`AppState::show_comment_form`).

use postboard_core::prelude::*;
use postboard_core::Comment;

use crate::comment_form::CommentFormState;
use crate::request::{RequestGeneration, RequestId};

/// Message stored when the comments of a post cannot be fetched
pub const LOAD_ERROR: &str = "Can not upload comments";

/// What the comments region shows, first match wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentsPanel {
    Loading,
    Error,
    Empty,
    List,
}

#[derive(Debug, Clone, Default)]
pub struct PostDetailsState {
    pub comments: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,

    /// Generation keyed to the open post
    pub request: RequestGeneration,

    /// First visible comment
    pub scroll: usize,

    pub form: CommentFormState,
}

impl PostDetailsState {
    /// Start loading the comments of a newly opened post
    pub fn begin_load(&mut self) -> RequestId {
        self.error = None;
        self.loading = true;
        self.comments.clear();
        self.scroll = 0;
        self.request.next()
    }

    /// The post was closed: drop any pending result and clear the view
    pub fn close(&mut self) {
        self.request.invalidate();
        self.loading = false;
        self.error = None;
        self.comments.clear();
        self.scroll = 0;
    }

    /// Apply a comments response. Returns `false` for a stale response.
    pub fn apply_loaded(&mut self, request: RequestId, comments: Vec<Comment>) -> bool {
        if !self.request.is_current(request) {
            debug!(
                "Discarding stale comments response (request {})",
                request.value()
            );
            return false;
        }
        self.comments = comments;
        self.loading = false;
        true
    }

    /// Apply a comments failure. Returns `false` for a stale response.
    pub fn apply_load_failed(&mut self, request: RequestId) -> bool {
        if !self.request.is_current(request) {
            debug!(
                "Discarding stale comments failure (request {})",
                request.value()
            );
            return false;
        }
        self.error = Some(LOAD_ERROR.to_string());
        self.loading = false;
        self.comments.clear();
        true
    }

    /// Append a comment created by the embedded form
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Error callback handed to the embedded form
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn panel(&self) -> CommentsPanel {
        if self.loading {
            CommentsPanel::Loading
        } else if self.error.is_some() {
            CommentsPanel::Error
        } else if self.comments.is_empty() {
            CommentsPanel::Empty
        } else {
            CommentsPanel::List
        }
    }

    /// Whether the "Write a comment" control is shown
    pub fn can_write_comment(&self, form_visible: bool) -> bool {
        !self.loading && self.error.is_none() && !form_visible
    }

    /// Whether the form is rendered, given the root's visibility flag
    pub fn shows_form(&self, show_comment_form: bool) -> bool {
        show_comment_form && self.error.is_none()
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.comments.len() {
            self.scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64) -> Comment {
        Comment {
            id,
            post_id: 1,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            body: "hi".to_string(),
        }
    }

    #[test]
    fn test_begin_load_clears_error_and_sets_loading() {
        let mut details = PostDetailsState {
            error: Some(LOAD_ERROR.to_string()),
            ..Default::default()
        };

        details.begin_load();

        assert!(details.loading);
        assert!(details.error.is_none());
        assert_eq!(details.panel(), CommentsPanel::Loading);
    }

    #[test]
    fn test_apply_loaded_replaces_comments() {
        let mut details = PostDetailsState::default();
        let request = details.begin_load();

        assert!(details.apply_loaded(request, vec![comment(1), comment(2)]));

        assert!(!details.loading);
        assert_eq!(details.comments.len(), 2);
        assert_eq!(details.panel(), CommentsPanel::List);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut details = PostDetailsState::default();
        let stale = details.begin_load();
        let current = details.begin_load();

        assert!(!details.apply_loaded(stale, vec![comment(9)]));
        assert!(details.loading);
        assert!(details.comments.is_empty());

        assert!(details.apply_loaded(current, vec![]));
        assert_eq!(details.panel(), CommentsPanel::Empty);
    }

    #[test]
    fn test_failure_clears_comments_and_sets_error() {
        let mut details = PostDetailsState::default();
        let request = details.begin_load();
        details.comments.push(comment(1));

        assert!(details.apply_load_failed(request));

        assert!(details.comments.is_empty());
        assert_eq!(details.error.as_deref(), Some(LOAD_ERROR));
        assert_eq!(details.panel(), CommentsPanel::Error);
    }

    #[test]
    fn test_close_discards_pending_request() {
        let mut details = PostDetailsState::default();
        let request = details.begin_load();

        details.close();

        assert!(!details.loading);
        assert!(!details.apply_load_failed(request));
        assert!(details.error.is_none());
    }

    #[test]
    fn test_write_control_visibility() {
        let mut details = PostDetailsState::default();
        assert!(details.can_write_comment(false));
        assert!(!details.can_write_comment(true));

        details.loading = true;
        assert!(!details.can_write_comment(false));

        details.loading = false;
        details.set_error("boom");
        assert!(!details.can_write_comment(false));
        assert!(!details.shows_form(true));
    }

    #[test]
    fn test_scroll_is_bounded_by_comment_count() {
        let mut details = PostDetailsState {
            comments: vec![comment(1), comment(2)],
            ..Default::default()
        };

        details.scroll_down();
        details.scroll_down();
        assert_eq!(details.scroll, 1);

        details.scroll_up();
        details.scroll_up();
        assert_eq!(details.scroll, 0);
    }
}
