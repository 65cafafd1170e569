//! Status bar widget
//!
//! Key hint for the focused element on the left, the time the current posts
//! were loaded on the right.

use postboard_app::comment_form::FormField;
use postboard_app::state::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::spinner;

/// One-row status bar
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focus_hint(&self) -> &'static str {
        if self.state.user_selector.open {
            return "↑↓ highlight  Enter select  Esc close";
        }
        match self.state.focus {
            Focus::UserSelector => "Enter choose a user  Tab next",
            Focus::PostsList => "↑↓ move  Enter open/close  Tab next",
            Focus::PostDetails => "w write a comment  ↑↓ scroll  Esc close post",
            Focus::CommentForm(FormField::Submit | FormField::Clear) => {
                "Enter press  Esc back to comments"
            }
            Focus::CommentForm(_) => "Enter submit  Ctrl+U clear field  Esc back",
        }
    }

    fn loaded_at(&self) -> Option<Span<'static>> {
        self.state.posts_loaded_at.map(|at| {
            Span::styled(
                format!("Posts loaded {} ", at.format("%H:%M:%S")),
                styles::text_muted(),
            )
        })
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut left = vec![Span::raw(" ")];
        if self.state.is_busy() {
            left.push(Span::styled(
                format!("{} ", spinner(self.state.spinner_frame)),
                styles::accent(),
            ));
        }
        left.push(Span::styled(self.focus_hint(), styles::text_secondary()));
        let left = Line::from(left);
        buf.set_line(area.x, area.y, &left, area.width);

        if let Some(span) = self.loaded_at() {
            let right = Line::from(span);
            let width = right.width() as u16;
            if left.width() as u16 + width < area.width {
                buf.set_line(area.x + area.width - width, area.y, &right, width);
            }
        }
    }
}
