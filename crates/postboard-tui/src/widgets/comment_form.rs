//! New comment form widget

use postboard_app::comment_form::{CommentFormState, FormField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

use super::spinner;

/// Rows needed to draw the whole form, borders included
pub const FORM_HEIGHT: u16 = 12;

const TEXT_FIELDS: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Body];

pub struct CommentForm<'a> {
    form: &'a CommentFormState,
    focus: Option<FormField>,
    spinner_frame: usize,
}

impl<'a> CommentForm<'a> {
    pub fn new(form: &'a CommentFormState) -> Self {
        Self {
            form,
            focus: None,
            spinner_frame: 0,
        }
    }

    /// Field with keyboard focus, if the form has it
    pub fn focus(mut self, focus: Option<FormField>) -> Self {
        self.focus = focus;
        self
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    /// The input line: value (or placeholder) with a cursor when focused,
    /// keeping the tail visible when the text is wider than the field
    fn input_line(&self, field: FormField, width: u16) -> Line<'a> {
        let value = self.form.value(field);
        let focused = self.focus == Some(field);
        let border = if focused {
            styles::border_active()
        } else {
            styles::border_inactive()
        };

        let mut spans = vec![Span::styled("▌", border)];
        if value.is_empty() {
            spans.push(Span::styled(field.placeholder(), styles::text_muted()));
        } else {
            spans.push(Span::styled(
                visible_tail(value, width.saturating_sub(3) as usize),
                styles::text_primary(),
            ));
        }
        if focused {
            spans.push(Span::styled("█", styles::accent()));
        }
        Line::from(spans)
    }

    fn buttons_line(&self) -> Line<'static> {
        let add_label = if self.form.submitting {
            format!("{} Add", spinner(self.spinner_frame))
        } else {
            FormField::Submit.label().to_string()
        };
        Line::from(vec![
            styles::button(&add_label, self.focus == Some(FormField::Submit), true),
            Span::raw("  "),
            styles::button(
                FormField::Clear.label(),
                self.focus == Some(FormField::Clear),
                false,
            ),
        ])
    }
}

/// Suffix of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut tail = String::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.insert(0, c);
    }
    tail
}

impl Widget for CommentForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focus.is_some()).title(" Write a comment ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::with_capacity(FORM_HEIGHT as usize);
        for field in TEXT_FIELDS {
            lines.push(Line::styled(field.label(), styles::text_secondary()));
            lines.push(self.input_line(field, inner.width));
            if self.form.is_missing(field) {
                lines.push(Line::styled(field.missing_message(), styles::validation()));
            } else {
                lines.push(Line::default());
            }
        }
        lines.push(self.buttons_line());

        for (row, line) in lines.iter().take(inner.height as usize).enumerate() {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}
