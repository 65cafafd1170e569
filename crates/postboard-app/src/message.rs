//! Message types for the application (TEA pattern)

use crate::comment_form::FormField;
use crate::input_key::InputKey;
use crate::request::RequestId;
use crate::state::Focus;
use postboard_core::{Comment, Post, User};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // ─────────────────────────────────────────────────────────
    // User Selector
    // ─────────────────────────────────────────────────────────
    /// Open or close the dropdown
    ToggleUserDropdown,
    /// Close the dropdown without selecting
    CloseUserDropdown,
    UserDropdownUp,
    UserDropdownDown,
    /// Choose the highlighted dropdown entry
    ConfirmUserDropdown,
    /// A user was chosen (the selector's callback, carries the full record)
    SelectUser(User),

    // ─────────────────────────────────────────────────────────
    // Data Service Results
    // ─────────────────────────────────────────────────────────
    UsersLoaded {
        users: Vec<User>,
    },
    UsersLoadFailed {
        error: String,
    },
    PostsLoaded {
        request: RequestId,
        posts: Vec<Post>,
    },
    PostsLoadFailed {
        request: RequestId,
        error: String,
    },
    CommentsLoaded {
        request: RequestId,
        comments: Vec<Comment>,
    },
    CommentsLoadFailed {
        request: RequestId,
        error: String,
    },
    CommentCreated {
        request: RequestId,
        comment: Comment,
    },
    CommentCreateFailed {
        request: RequestId,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Posts List
    // ─────────────────────────────────────────────────────────
    PostsCursorUp,
    PostsCursorDown,
    PostsCursorTop,
    PostsCursorBottom,
    /// Open or close the post under the cursor
    TogglePostAtCursor,
    /// Open `post`, or close it if it is already open
    TogglePost(Post),

    // ─────────────────────────────────────────────────────────
    // Post Details
    // ─────────────────────────────────────────────────────────
    CommentsScrollUp,
    CommentsScrollDown,
    /// "Write a comment"
    ShowCommentForm,

    // ─────────────────────────────────────────────────────────
    // New Comment Form
    // ─────────────────────────────────────────────────────────
    /// Replace the text of a form field
    CommentFormInput {
        field: FormField,
        text: String,
    },
    SubmitComment,
    ClearCommentForm,
}
