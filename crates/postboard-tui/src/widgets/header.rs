//! Header bar widget
//!
//! Application title, the API host requests go to, and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const TITLE: &str = "Postboard";

const KEY_HINTS: [(&str, &str); 3] = [("Tab", "Focus"), ("Enter", "Open"), ("q", "Quit")];

/// Main header showing app title, API host, and keybindings
pub struct MainHeader<'a> {
    api_host: &'a str,
    show_key_hints: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(api_host: &'a str) -> Self {
        Self {
            api_host,
            show_key_hints: true,
        }
    }

    pub fn key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn hints_line() -> Line<'static> {
        let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
        for (key, label) in KEY_HINTS {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.api_host, styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        if !self.show_key_hints {
            return;
        }

        // Right-align the hints when they fit next to the title
        let hints = Self::hints_line();
        let hints_width = hints.width() as u16;
        if left_width + 2 + hints_width <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
