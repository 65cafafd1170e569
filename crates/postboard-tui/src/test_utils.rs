//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are drawn into ratatui's `TestBackend` and
//! asserted on by text content.

use postboard_core::{Comment, Post, User};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a `TestBackend` terminal with text assertions
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Whether `text` appears on any single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        let buffer = self.buffer();
        (0..buffer.area.height).any(|y| row_text(buffer, y).contains(text))
    }

    /// All rows joined by newlines, for failure messages
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Three users, in service order
pub fn test_users() -> Vec<User> {
    [
        (1, "Leanne Graham", "Sincere@april.biz"),
        (2, "Ervin Howell", "Shanna@melissa.tv"),
        (10, "Clementina DuBuque", "Rey.Padberg@karina.biz"),
    ]
    .into_iter()
    .map(|(id, name, email)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
    })
    .collect()
}

/// Two posts owned by `user_id`, ids 1 and 2
pub fn test_posts(user_id: i64) -> Vec<Post> {
    vec![
        Post {
            id: 1,
            user_id,
            title: "sunt aut facere".to_string(),
            body: "quia et suscipit".to_string(),
        },
        Post {
            id: 2,
            user_id,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae".to_string(),
        },
    ]
}

/// Two comments on `post_id`
pub fn test_comments(post_id: i64) -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            post_id,
            name: "id labore".to_string(),
            email: "Eliseo@gardner.biz".to_string(),
            body: "laudantium enim quasi est".to_string(),
        },
        Comment {
            id: 2,
            post_id,
            name: "quo vero".to_string(),
            email: "Jayne_Kuhic@sydney.com".to_string(),
            body: "est natus enim nihil".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_contains_matches_within_a_row() {
        let mut term = TestTerminal::with_size(20, 2);
        let area = term.area();

        term.render_widget(Paragraph::new("hello\nworld"), area);

        assert!(term.buffer_contains("hello"));
        assert!(term.buffer_contains("world"));
        assert!(!term.buffer_contains("helloworld"));
        assert!(term.content().contains("hello"));
    }
}
