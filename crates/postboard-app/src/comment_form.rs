//! New comment form state
//!
//! Local field values with one independent "missing" flag per field. Only
//! presence is validated; the email is not checked for shape.

use postboard_core::NewComment;

/// Message reported upward when the service rejects a new comment
pub const CREATE_ERROR: &str = "Can not add a comment";

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Body,
    /// The "Add" button
    Submit,
    /// The "Clear" button
    Clear,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Body,
        FormField::Submit,
        FormField::Clear,
    ];

    /// Whether the element accepts typed text
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Body)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Author Name",
            FormField::Email => "Author Email",
            FormField::Body => "Comment Text",
            FormField::Submit => "Add",
            FormField::Clear => "Clear",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name Surname",
            FormField::Email => "email@test.com",
            FormField::Body => "Type comment here",
            FormField::Submit | FormField::Clear => "",
        }
    }

    /// Validation text shown under a missing field
    pub fn missing_message(&self) -> &'static str {
        match self {
            FormField::Name => "Name is required",
            FormField::Email => "Email is required",
            FormField::Body => "Enter some text",
            FormField::Submit | FormField::Clear => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFormState {
    pub name: String,
    pub email: String,
    pub body: String,

    pub name_missing: bool,
    pub email_missing: bool,
    pub body_missing: bool,

    /// A create request is in flight
    pub submitting: bool,
}

impl CommentFormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Body => &self.body,
            FormField::Submit | FormField::Clear => "",
        }
    }

    pub fn is_missing(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name_missing,
            FormField::Email => self.email_missing,
            FormField::Body => self.body_missing,
            FormField::Submit | FormField::Clear => false,
        }
    }

    /// Replace a field's text. Editing a field clears only that field's
    /// missing flag.
    pub fn set_value(&mut self, field: FormField, text: String) {
        match field {
            FormField::Name => {
                self.name = text;
                self.name_missing = false;
            }
            FormField::Email => {
                self.email = text;
                self.email_missing = false;
            }
            FormField::Body => {
                self.body = text;
                self.body_missing = false;
            }
            FormField::Submit | FormField::Clear => {}
        }
    }

    /// Recompute all three missing flags together and report whether the
    /// form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.name_missing = self.name.is_empty();
        self.email_missing = self.email.is_empty();
        self.body_missing = self.body.is_empty();

        !(self.name_missing || self.email_missing || self.body_missing)
    }

    /// Payload for `POST /comments`
    pub fn to_new_comment(&self, post_id: i64) -> NewComment {
        NewComment {
            post_id,
            name: self.name.clone(),
            email: self.email.clone(),
            body: self.body.clone(),
        }
    }

    /// After a successful create: drop the body, keep the author so the same
    /// person can write several comments in a row.
    pub fn finish_success(&mut self) {
        self.body.clear();
        self.submitting = false;
    }

    /// After a failed create: values stay as typed.
    pub fn finish_failure(&mut self) {
        self.submitting = false;
    }

    /// Reset every value and flag (the "Clear" control)
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.body.clear();
        self.name_missing = false;
        self.email_missing = false;
        self.body_missing = false;
    }
}
