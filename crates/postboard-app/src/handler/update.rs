//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use postboard_core::AppPhase;

use super::{comments, keys::handle_key, selection, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);

    // Panels appear and disappear as state changes; keep focus on screen
    state.ensure_focus_visible();

    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.user_selector.close();
            state.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.user_selector.close();
            state.focus_previous();
            UpdateResult::none()
        }
        Message::SetFocus(focus) => {
            state.focus = focus;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // User Selector
        // ─────────────────────────────────────────────────────────
        Message::ToggleUserDropdown => {
            state
                .user_selector
                .toggle(&state.users, state.selected_user.as_ref());
            UpdateResult::none()
        }
        Message::CloseUserDropdown => {
            state.user_selector.close();
            UpdateResult::none()
        }
        Message::UserDropdownUp => {
            state.user_selector.highlight_previous();
            UpdateResult::none()
        }
        Message::UserDropdownDown => {
            state.user_selector.highlight_next(state.users.len());
            UpdateResult::none()
        }
        Message::ConfirmUserDropdown => selection::handle_confirm_user_dropdown(state),
        Message::SelectUser(user) => selection::handle_select_user(state, user),

        // ─────────────────────────────────────────────────────────
        // Data Service Results
        // ─────────────────────────────────────────────────────────
        Message::UsersLoaded { users } => selection::handle_users_loaded(state, users),
        Message::UsersLoadFailed { error } => selection::handle_users_load_failed(state, error),
        Message::PostsLoaded { request, posts } => {
            selection::handle_posts_loaded(state, request, posts)
        }
        Message::PostsLoadFailed { request, error } => {
            selection::handle_posts_load_failed(state, request, error)
        }
        Message::CommentsLoaded { request, comments } => {
            comments::handle_comments_loaded(state, request, comments)
        }
        Message::CommentsLoadFailed { request, error } => {
            comments::handle_comments_load_failed(state, request, error)
        }
        Message::CommentCreated { request, comment } => {
            comments::handle_comment_created(state, request, comment)
        }
        Message::CommentCreateFailed { request, error } => {
            comments::handle_comment_create_failed(state, request, error)
        }

        // ─────────────────────────────────────────────────────────
        // Posts List
        // ─────────────────────────────────────────────────────────
        Message::PostsCursorUp => {
            state.posts_list.move_up();
            UpdateResult::none()
        }
        Message::PostsCursorDown => {
            state.posts_list.move_down(state.posts.len());
            UpdateResult::none()
        }
        Message::PostsCursorTop => {
            state.posts_list.move_to_top();
            UpdateResult::none()
        }
        Message::PostsCursorBottom => {
            state.posts_list.move_to_bottom(state.posts.len());
            UpdateResult::none()
        }
        Message::TogglePostAtCursor => match state.posts_list.current(&state.posts) {
            Some(post) => UpdateResult::message(Message::TogglePost(post.clone())),
            None => UpdateResult::none(),
        },
        Message::TogglePost(post) => selection::handle_toggle_post(state, post),

        // ─────────────────────────────────────────────────────────
        // Post Details
        // ─────────────────────────────────────────────────────────
        Message::CommentsScrollUp => {
            state.post_details.scroll_up();
            UpdateResult::none()
        }
        Message::CommentsScrollDown => {
            state.post_details.scroll_down();
            UpdateResult::none()
        }
        Message::ShowCommentForm => comments::handle_show_comment_form(state),

        // ─────────────────────────────────────────────────────────
        // New Comment Form
        // ─────────────────────────────────────────────────────────
        Message::CommentFormInput { field, text } => {
            state.post_details.form.set_value(field, text);
            UpdateResult::none()
        }
        Message::SubmitComment => comments::handle_submit_comment(state),
        Message::ClearCommentForm => {
            state.post_details.form.clear();
            UpdateResult::none()
        }
    }
}
