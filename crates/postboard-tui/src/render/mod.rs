//! Main render/view function (View in TEA pattern)


use postboard_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let background = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(background, area);

    let areas = layout::create(area, state.show_sidebar);

    let api_host = state.settings.api_host();
    frame.render_widget(
        widgets::MainHeader::new(&api_host).key_hints(state.settings.ui.show_key_hints),
        areas.header,
    );

    frame.render_widget(widgets::UserSelector::new(state), areas.selector);
    frame.render_widget(widgets::PostsTable::new(state), areas.posts);

    if let Some(sidebar) = areas.sidebar {
        frame.render_widget(widgets::PostDetails::new(state), sidebar);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Dropdown last so it overlays the posts panel
    if state.user_selector.open {
        let rows = state.users.len();
        frame.render_widget(
            widgets::UserDropdown::new(state),
            layout::dropdown_area(&areas, rows),
        );
    }
}
