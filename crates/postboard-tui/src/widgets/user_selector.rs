//! User selector widgets
//!
//! [`UserSelector`] is the button showing the chosen user; [`UserDropdown`]
//! is the list drawn over the posts panel while the dropdown is open.

use postboard_app::state::{AppState, Focus};
use postboard_app::user_selector;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::theme::styles;

/// The dropdown button
pub struct UserSelector<'a> {
    state: &'a AppState,
}

impl<'a> UserSelector<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for UserSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::UserSelector;
        let block = styles::glass_block(focused || self.state.user_selector.open);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let selected = self.state.selected_user.as_ref();
        let label_style = if selected.is_some() {
            styles::text_primary()
        } else {
            styles::text_muted()
        };
        let caret = if self.state.user_selector.open {
            "▴"
        } else {
            "▾"
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(user_selector::button_label(selected), label_style),
            Span::raw(" "),
            Span::styled(caret, styles::accent()),
        ];
        if let Some(error) = &self.state.users_error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(error.as_str(), styles::error()));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

/// The open dropdown list
pub struct UserDropdown<'a> {
    state: &'a AppState,
}

impl<'a> UserDropdown<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn entry(&self, index: usize) -> Option<Line<'a>> {
        let user = self.state.users.get(index)?;
        let active = user_selector::is_active(user, self.state.selected_user.as_ref());
        let highlighted = index == self.state.user_selector.highlighted;

        let marker = if active { "● " } else { "  " };
        let style = if highlighted {
            styles::focused_selected()
        } else if active {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        Some(Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(user.name.as_str(), style),
        ]))
    }
}

impl Widget for UserDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.users.is_empty() {
            let line = match &self.state.users_error {
                Some(error) => Line::styled(error.as_str(), styles::error()),
                None => Line::styled("Loading...", styles::text_muted()),
            };
            buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));
            return;
        }

        // Scroll so the highlight stays visible
        let visible = inner.height as usize;
        let offset = self
            .state
            .user_selector
            .highlighted
            .saturating_sub(visible - 1);

        for (row, index) in (offset..self.state.users.len()).take(visible).enumerate() {
            if let Some(line) = self.entry(index) {
                buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_users, TestTerminal};
    use postboard_app::state::USERS_LOAD_ERROR;

    #[test]
    fn test_button_shows_placeholder() {
        let state = AppState::new();
        let mut term = TestTerminal::new();

        term.render_widget(UserSelector::new(&state), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains(user_selector::PLACEHOLDER));
    }

    #[test]
    fn test_button_shows_selected_name() {
        let mut state = AppState::new();
        state.users = test_users();
        state.selected_user = state.users.get(1).cloned();
        let mut term = TestTerminal::new();

        term.render_widget(UserSelector::new(&state), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("Ervin Howell"));
        assert!(!term.buffer_contains(user_selector::PLACEHOLDER));
    }

    #[test]
    fn test_button_reports_users_error() {
        let mut state = AppState::new();
        state.users_error = Some(USERS_LOAD_ERROR.to_string());
        let mut term = TestTerminal::new();

        term.render_widget(UserSelector::new(&state), Rect::new(0, 0, 60, 3));

        assert!(term.buffer_contains(USERS_LOAD_ERROR));
    }

    #[test]
    fn test_dropdown_lists_every_user() {
        let mut state = AppState::new();
        state.users = test_users();
        state.selected_user = state.users.first().cloned();
        let mut term = TestTerminal::new();

        term.render_widget(UserDropdown::new(&state), Rect::new(0, 0, 40, 8));

        for user in &state.users {
            assert!(term.buffer_contains(&user.name));
        }
        assert!(term.buffer_contains("● Leanne Graham"));
    }

    #[test]
    fn test_dropdown_scrolls_to_highlight() {
        let mut state = AppState::new();
        state.users = test_users();
        state.user_selector.highlighted = state.users.len() - 1;
        let mut term = TestTerminal::new();

        // Room for a single entry
        term.render_widget(UserDropdown::new(&state), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("Clementina DuBuque"));
        assert!(!term.buffer_contains("Leanne Graham"));
    }
}
