//! User selection, posts loading, and opening/closing posts

use chrono::Local;
use postboard_core::prelude::*;
use postboard_core::{Post, User};

use crate::message::Message;
use crate::request::RequestId;
use crate::state::{AppState, Focus, POSTS_LOAD_ERROR, USERS_LOAD_ERROR};

use super::{UpdateAction, UpdateResult};

pub fn handle_users_loaded(state: &mut AppState, users: Vec<User>) -> UpdateResult {
    info!("Loaded {} users", users.len());
    state.users = users;
    state.users_error = None;
    state.user_selector.clamp(state.users.len());
    UpdateResult::none()
}

pub fn handle_users_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Failed to load users: {}", error);
    state.users_error = Some(USERS_LOAD_ERROR.to_string());
    UpdateResult::none()
}

/// Enter on a dropdown entry: close the dropdown, then report the choice
pub fn handle_confirm_user_dropdown(state: &mut AppState) -> UpdateResult {
    let chosen = state
        .user_selector
        .highlighted_user(&state.users)
        .cloned();
    state.user_selector.close();

    match chosen {
        Some(user) => UpdateResult::message(Message::SelectUser(user)),
        None => UpdateResult::none(),
    }
}

/// A user was chosen: reset everything that belonged to the previous
/// selection and request the new user's posts.
///
/// Choosing the already-selected user fetches again, which is how the
/// operator recovers from a failed posts fetch.
pub fn handle_select_user(state: &mut AppState, user: User) -> UpdateResult {
    info!("Selected user {} ({})", user.id, user.name);

    state.selected_post = None;
    state.show_sidebar = false;
    state.show_comment_form = false;
    state.post_details.close();

    state.posts.clear();
    state.posts_error = None;
    state.posts_loaded_at = None;
    state.posts_loading = true;
    state.posts_list.reset();

    let request = state.posts_request.next();
    let user_id = user.id;
    state.selected_user = Some(user);

    UpdateResult::action(UpdateAction::FetchPosts { request, user_id })
}

pub fn handle_posts_loaded(
    state: &mut AppState,
    request: RequestId,
    posts: Vec<Post>,
) -> UpdateResult {
    if !state.posts_request.is_current(request) {
        debug!(
            "Discarding stale posts response (request {})",
            request.value()
        );
        return UpdateResult::none();
    }

    info!("Loaded {} posts", posts.len());
    state.posts = posts;
    state.posts_loading = false;
    state.posts_loaded_at = Some(Local::now());
    state.posts_list.reset();
    UpdateResult::none()
}

pub fn handle_posts_load_failed(
    state: &mut AppState,
    request: RequestId,
    error: String,
) -> UpdateResult {
    if !state.posts_request.is_current(request) {
        debug!(
            "Discarding stale posts failure (request {}): {}",
            request.value(),
            error
        );
        return UpdateResult::none();
    }

    warn!("Failed to load posts: {}", error);
    state.posts.clear();
    state.posts_error = Some(POSTS_LOAD_ERROR.to_string());
    state.posts_loading = false;
    UpdateResult::none()
}

/// Open `post`, or close it when it is the one already open. Either way the
/// comment form is hidden.
pub fn handle_toggle_post(state: &mut AppState, post: Post) -> UpdateResult {
    state.show_comment_form = false;

    let already_open = state
        .selected_post
        .as_ref()
        .is_some_and(|open| open.id == post.id);

    if already_open {
        debug!("Closing post {}", post.id);
        state.selected_post = None;
        state.show_sidebar = false;
        state.post_details.close();
        if state.focus != Focus::UserSelector {
            state.focus = Focus::PostsList;
        }
        return UpdateResult::none();
    }

    debug!("Opening post {}", post.id);
    let post_id = post.id;
    state.selected_post = Some(post);
    state.show_sidebar = true;
    let request = state.post_details.begin_load();

    UpdateResult::action(UpdateAction::FetchComments { request, post_id })
}
