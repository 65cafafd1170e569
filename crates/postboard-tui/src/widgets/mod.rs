//! Custom widget components
//!
//! One widget per screen component. Widgets borrow the state they draw and
//! never mutate it.

mod comment_form;
mod header;
mod post_details;
mod posts_table;
mod status_bar;
mod user_selector;

pub use comment_form::CommentForm;
pub use header::MainHeader;
pub use post_details::PostDetails;
pub use posts_table::PostsTable;
pub use status_bar::StatusBar;
pub use user_selector::{UserDropdown, UserSelector};

/// Notice shown in place of a list whose request failed
const ERROR_NOTICE: &str = "Something went wrong!";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given tick count
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
