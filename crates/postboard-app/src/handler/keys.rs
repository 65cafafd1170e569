//! Key event handlers for the focused element

use crate::comment_form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere, including text fields
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.user_selector.open {
        return handle_key_user_dropdown(key);
    }

    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::UserSelector => handle_key_user_selector(key),
        Focus::PostsList => handle_key_posts_list(state, key),
        Focus::PostDetails => handle_key_post_details(state, key),
        Focus::CommentForm(field) if field.is_text() => handle_key_form_text(state, field, key),
        Focus::CommentForm(field) => handle_key_form_button(field, key),
    }
}

/// Handle key events while the user dropdown is expanded
fn handle_key_user_dropdown(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::UserDropdownUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::UserDropdownDown),
        InputKey::Enter => Some(Message::ConfirmUserDropdown),
        InputKey::Esc | InputKey::Tab | InputKey::BackTab => Some(Message::CloseUserDropdown),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_user_selector(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') | InputKey::Down => {
            Some(Message::ToggleUserDropdown)
        }
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_posts_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::PostsCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::PostsCursorDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::PostsCursorTop),
        InputKey::End | InputKey::Char('G') => Some(Message::PostsCursorBottom),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::TogglePostAtCursor),

        // Close whatever post is open
        InputKey::Esc => state.selected_post.clone().map(Message::TogglePost),

        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_post_details(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('w') | InputKey::Enter => {
            if state
                .post_details
                .can_write_comment(state.show_comment_form)
            {
                Some(Message::ShowCommentForm)
            } else if state.comment_form_visible() {
                Some(Message::SetFocus(Focus::CommentForm(FormField::Name)))
            } else {
                None
            }
        }
        InputKey::Up | InputKey::Char('k') => Some(Message::CommentsScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CommentsScrollDown),
        InputKey::Esc => state.selected_post.clone().map(Message::TogglePost),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in a text field of the new comment form
fn handle_key_form_text(state: &AppState, field: FormField, key: InputKey) -> Option<Message> {
    let current = state.post_details.form.value(field);

    match key {
        InputKey::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(Message::CommentFormInput { field, text })
        }

        // Delete character
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(Message::CommentFormInput { field, text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::CommentFormInput {
            field,
            text: String::new(),
        }),

        InputKey::Enter => Some(Message::SubmitComment),
        InputKey::Up => Some(Message::FocusPrevious),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Esc => Some(Message::SetFocus(Focus::PostDetails)),
        _ => None,
    }
}

/// Handle key events on the Add / Clear buttons
fn handle_key_form_button(field: FormField, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => match field {
            FormField::Clear => Some(Message::ClearCommentForm),
            _ => Some(Message::SubmitComment),
        },
        InputKey::Up | InputKey::Left => Some(Message::FocusPrevious),
        InputKey::Down | InputKey::Right => Some(Message::FocusNext),
        InputKey::Esc => Some(Message::SetFocus(Focus::PostDetails)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
