//! Posts panel widget
//!
//! Shows exactly one of: a placeholder, the loader, the error notice, the
//! empty notice, or the table of the selected user's posts.

use postboard_app::posts_list;
use postboard_app::state::{AppState, Focus, PostsPanel};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::theme::styles;

use super::{spinner, ERROR_NOTICE};

/// Width of the button column ("Close" plus brackets)
const BUTTON_WIDTH: u16 = 9;

pub struct PostsTable<'a> {
    state: &'a AppState,
}

impl<'a> PostsTable<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn notice(&self, panel: PostsPanel) -> Line<'static> {
        match panel {
            PostsPanel::NoUserSelected => Line::styled("No user selected", styles::text_muted()),
            PostsPanel::Loading => Line::styled(
                format!("{} Loading...", spinner(self.state.spinner_frame)),
                styles::accent(),
            ),
            PostsPanel::Error => Line::styled(ERROR_NOTICE, styles::error()),
            PostsPanel::Empty => Line::styled("No posts yet", styles::text_secondary()),
            PostsPanel::List => Line::default(),
        }
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let open = self.state.selected_post.as_ref();

        let rows = self.state.posts.iter().map(|post| {
            let is_open = posts_list::is_open(post, open);
            let button = posts_list::button_label(post, open);
            let row = Row::new(vec![
                Cell::from(post.id.to_string()),
                Cell::from(post.title.as_str()),
                Cell::from(Line::from(styles::button(button, false, !is_open))),
            ]);
            if is_open {
                row.style(styles::open_row())
            } else {
                row
            }
        });

        let header = Row::new(vec!["#", "Title", ""]).style(styles::title());

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(BUTTON_WIDTH),
            ],
        )
        .header(header)
        .column_spacing(1)
        .row_highlight_style(if focused {
            styles::focused_selected()
        } else {
            Style::default()
        });

        let mut table_state = TableState::default().with_selected(Some(self.state.posts_list.cursor));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

impl Widget for PostsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::PostsList;
        let block = styles::glass_block(focused).title(" Posts ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.state.posts_panel() {
            PostsPanel::List => self.render_table(inner, buf, focused),
            panel => Paragraph::new(self.notice(panel))
                .alignment(Alignment::Center)
                .render(inner, buf),
        }
    }
}
