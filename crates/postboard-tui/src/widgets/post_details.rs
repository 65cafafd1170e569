//! Post details sidebar widget
//!
//! Title and body of the open post, its comments region, the "Write a
//! comment" control and, when shown, the new comment form.

use postboard_app::post_details::CommentsPanel;
use postboard_app::state::{AppState, Focus};
use postboard_core::{Comment, Post};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::comment_form::{CommentForm, FORM_HEIGHT};
use super::{spinner, ERROR_NOTICE};

/// Inert delete marker drawn next to each comment
const DELETE_MARKER: &str = "✕";

const WRITE_LABEL: &str = "Write a comment";

/// Shown instead of the form when the sidebar is too short to hold it
const FORM_TOO_SMALL: &str = "Enlarge the terminal to see the comment form";

pub struct PostDetails<'a> {
    state: &'a AppState,
}

impl<'a> PostDetails<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn post_lines(post: &'a Post) -> Vec<Line<'a>> {
        vec![
            Line::styled(format!("#{}: {}", post.id, post.title), styles::title()),
            Line::default(),
            Line::styled(post.body.as_str(), styles::text_secondary()),
            Line::default(),
        ]
    }

    fn comment_lines(comment: &'a Comment) -> [Line<'a>; 3] {
        [
            Line::from(vec![
                Span::styled(comment.author_label(), styles::link()),
                Span::raw(" "),
                Span::styled(DELETE_MARKER, styles::text_muted()),
            ]),
            Line::styled(comment.body.as_str(), styles::text_primary()),
            Line::default(),
        ]
    }

    fn comments_region(&self) -> Vec<Line<'a>> {
        let details = &self.state.post_details;
        match details.panel() {
            CommentsPanel::Loading => vec![Line::styled(
                format!("{} Loading...", spinner(self.state.spinner_frame)),
                styles::accent(),
            )],
            CommentsPanel::Error => vec![Line::styled(ERROR_NOTICE, styles::error())],
            CommentsPanel::Empty => {
                vec![Line::styled("No comments yet", styles::text_secondary())]
            }
            CommentsPanel::List => {
                let mut lines = vec![Line::styled("Comments:", styles::title())];
                for comment in details.comments.iter().skip(details.scroll) {
                    lines.extend(Self::comment_lines(comment));
                }
                lines
            }
        }
    }

    fn write_control(&self) -> Option<Line<'static>> {
        if !self
            .state
            .post_details
            .can_write_comment(self.state.show_comment_form)
        {
            return None;
        }
        let focused = self.state.focus == Focus::PostDetails;
        Some(Line::from(styles::button(WRITE_LABEL, focused, true)))
    }

    fn form_focus(&self) -> Option<postboard_app::comment_form::FormField> {
        match self.state.focus {
            Focus::CommentForm(field) => Some(field),
            _ => None,
        }
    }
}

impl Widget for PostDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::PostDetails;
        let block = styles::glass_block(focused).title(" Post ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(post) = self.state.selected_post.as_ref() else {
            return;
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let form_visible = self.state.comment_form_visible();
        let form_rows = if !form_visible {
            0
        } else if inner.height > FORM_HEIGHT {
            FORM_HEIGHT
        } else {
            1
        };
        let [content, form_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(form_rows)]).areas(inner);

        let mut lines = Self::post_lines(post);
        if let Some(control) = self.write_control() {
            lines.push(control);
            lines.push(Line::default());
        }
        lines.extend(self.comments_region());

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(content, buf);

        // The form keeps focus while hidden, so say why it is missing
        if form_rows == FORM_HEIGHT {
            CommentForm::new(&self.state.post_details.form)
                .focus(self.form_focus())
                .spinner_frame(self.state.spinner_frame)
                .render(form_area, buf);
        } else if form_rows > 0 {
            Paragraph::new(Line::styled(FORM_TOO_SMALL, styles::validation()))
                .render(form_area, buf);
        }
    }
}
