//! Comments loading and the new comment form

use postboard_core::prelude::*;
use postboard_core::Comment;

use crate::comment_form::{CommentFormState, FormField, CREATE_ERROR};
use crate::request::RequestId;
use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

pub fn handle_comments_loaded(
    state: &mut AppState,
    request: RequestId,
    comments: Vec<Comment>,
) -> UpdateResult {
    let count = comments.len();
    if state.post_details.apply_loaded(request, comments) {
        info!("Loaded {} comments", count);
    }
    UpdateResult::none()
}

pub fn handle_comments_load_failed(
    state: &mut AppState,
    request: RequestId,
    error: String,
) -> UpdateResult {
    if state.post_details.apply_load_failed(request) {
        warn!("Failed to load comments: {}", error);
    }
    UpdateResult::none()
}

/// "Write a comment": show a fresh form and put the cursor in its first field
pub fn handle_show_comment_form(state: &mut AppState) -> UpdateResult {
    if state.selected_post.is_none() || !state.post_details.can_write_comment(state.show_comment_form)
    {
        return UpdateResult::none();
    }

    state.post_details.form = CommentFormState::default();
    state.show_comment_form = true;
    state.focus = Focus::CommentForm(FormField::Name);
    UpdateResult::none()
}

/// Validate all three fields together; post the comment only if none is empty
pub fn handle_submit_comment(state: &mut AppState) -> UpdateResult {
    if !state.comment_form_visible() || state.post_details.form.submitting {
        return UpdateResult::none();
    }
    let Some(post_id) = state.selected_post.as_ref().map(|p| p.id) else {
        return UpdateResult::none();
    };

    let form = &mut state.post_details.form;
    if !form.validate() {
        debug!(
            "Comment form incomplete (name: {}, email: {}, body: {})",
            !form.name_missing, !form.email_missing, !form.body_missing
        );
        return UpdateResult::none();
    }

    form.submitting = true;
    let comment = form.to_new_comment(post_id);
    let request = state.post_details.request.current();

    info!("Submitting comment on post {}", post_id);
    UpdateResult::action(UpdateAction::CreateComment { request, comment })
}

pub fn handle_comment_created(
    state: &mut AppState,
    request: RequestId,
    comment: Comment,
) -> UpdateResult {
    if !state.post_details.request.is_current(request) {
        debug!(
            "Dropping created comment {} for a post that is no longer open",
            comment.id
        );
        return UpdateResult::none();
    }

    info!("Created comment {} on post {}", comment.id, comment.post_id);
    state.post_details.form.finish_success();
    state.post_details.add_comment(comment);
    UpdateResult::none()
}

pub fn handle_comment_create_failed(
    state: &mut AppState,
    request: RequestId,
    error: String,
) -> UpdateResult {
    if !state.post_details.request.is_current(request) {
        debug!("Dropping comment failure for a post that is no longer open: {error}");
        return UpdateResult::none();
    }

    warn!("Failed to create comment: {}", error);
    state.post_details.form.finish_failure();
    state.post_details.set_error(CREATE_ERROR);
    UpdateResult::none()
}
