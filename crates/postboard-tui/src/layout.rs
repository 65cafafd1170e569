//! Screen layout definitions for the TUI
//!
//! Header on top, status bar at the bottom. The body holds the user selector
//! above the posts panel, and the sidebar to the right while a post is open.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered user selector button
const SELECTOR_HEIGHT: u16 = 3;

/// Share of the body width given to the sidebar
const SIDEBAR_PERCENT: u16 = 45;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, API host and key hints
    pub header: Rect,

    /// User selector button
    pub selector: Rect,

    /// Posts panel (notice or table)
    pub posts: Rect,

    /// Post details, present while a post is open
    pub sidebar: Option<Rect>,

    /// One-row status bar
    pub status: Rect,
}

/// Split the terminal into the main screen areas
pub fn create(area: Rect, show_sidebar: bool) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(SELECTOR_HEIGHT + 3),
        Constraint::Length(1),
    ])
    .areas(area);

    let (main, sidebar) = if show_sidebar {
        let [main, sidebar] = Layout::horizontal([
            Constraint::Percentage(100 - SIDEBAR_PERCENT),
            Constraint::Percentage(SIDEBAR_PERCENT),
        ])
        .areas(body);
        (main, Some(sidebar))
    } else {
        (body, None)
    };

    let [selector, posts] =
        Layout::vertical([Constraint::Length(SELECTOR_HEIGHT), Constraint::Min(0)]).areas(main);

    ScreenAreas {
        header,
        selector,
        posts,
        sidebar,
        status,
    }
}

/// Area for the expanded user dropdown: directly under the selector button,
/// overlapping the posts panel, at most `rows` entries tall
pub fn dropdown_area(areas: &ScreenAreas, rows: usize) -> Rect {
    let wanted = rows.max(1) as u16 + 2;
    let below = areas.posts;
    Rect {
        x: areas.selector.x,
        y: below.y,
        width: areas.selector.width.min(40),
        height: wanted.min(below.height),
    }
}
