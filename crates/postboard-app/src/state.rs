//! Application state (Model in TEA pattern)
//!
//! `AppState` is the root of the ownership tree: it owns the user list, the
//! selected user, the posts of that user, the open post and the sidebar/form
//! visibility flags. Component sub-states are owned fields; they change only
//! through `handler::update`.

use chrono::{DateTime, Local};

use crate::comment_form::FormField;
use crate::config::Settings;
use crate::post_details::PostDetailsState;
use crate::posts_list::PostsListState;
use crate::request::RequestGeneration;
use crate::user_selector::UserSelectorState;
use postboard_core::{AppPhase, Post, User};

/// Message stored when the posts of the selected user cannot be fetched
pub const POSTS_LOAD_ERROR: &str = "Can not upload post";

/// Message stored when the user list cannot be fetched at startup
pub const USERS_LOAD_ERROR: &str = "Can not load users";

/// Which element receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    UserSelector,
    PostsList,
    PostDetails,
    CommentForm(FormField),
}

/// What the main content panel shows, first match wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostsPanel {
    NoUserSelected,
    Loading,
    Error,
    Empty,
    List,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub focus: Focus,

    // ── Users ──────────────────────────────────────────────
    pub users: Vec<User>,
    /// Set when the startup fetch of users failed
    pub users_error: Option<String>,
    pub user_selector: UserSelectorState,
    pub selected_user: Option<User>,

    // ── Posts of the selected user ─────────────────────────
    pub posts: Vec<Post>,
    pub posts_loading: bool,
    pub posts_error: Option<String>,
    /// Generation keyed to the selected user
    pub posts_request: RequestGeneration,
    /// When the current posts arrived
    pub posts_loaded_at: Option<DateTime<Local>>,
    pub posts_list: PostsListState,

    // ── Open post ──────────────────────────────────────────
    pub selected_post: Option<Post>,
    pub show_sidebar: bool,
    pub show_comment_form: bool,
    pub post_details: PostDetailsState,

    /// Spinner frame, advanced on ticks while something is loading
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Rendering precedence of the main content panel
    pub fn posts_panel(&self) -> PostsPanel {
        if self.selected_user.is_none() {
            PostsPanel::NoUserSelected
        } else if self.posts_loading {
            PostsPanel::Loading
        } else if self.posts_error.is_some() {
            PostsPanel::Error
        } else if self.posts.is_empty() {
            PostsPanel::Empty
        } else {
            PostsPanel::List
        }
    }

    /// Whether the comment form is rendered in the sidebar
    pub fn comment_form_visible(&self) -> bool {
        self.show_sidebar && self.post_details.shows_form(self.show_comment_form)
    }

    /// Whether any request the operator is waiting on is in flight
    pub fn is_busy(&self) -> bool {
        self.posts_loading || self.post_details.loading || self.post_details.form.submitting
    }

    /// Focusable elements currently on screen, in tab order
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::UserSelector];
        if self.posts_panel() == PostsPanel::List {
            ring.push(Focus::PostsList);
        }
        if self.show_sidebar {
            ring.push(Focus::PostDetails);
        }
        if self.comment_form_visible() {
            ring.extend(FormField::ALL.iter().copied().map(Focus::CommentForm));
        }
        ring
    }

    pub fn focus_next(&mut self) {
        self.focus = step(&self.focus_ring(), self.focus, 1);
    }

    pub fn focus_previous(&mut self) {
        let ring = self.focus_ring();
        self.focus = step(&ring, self.focus, ring.len().saturating_sub(1));
    }

    /// Move focus off an element that is no longer on screen
    pub fn ensure_focus_visible(&mut self) {
        let ring = self.focus_ring();
        if ring.contains(&self.focus) {
            return;
        }
        self.focus = match self.focus {
            Focus::CommentForm(_) if ring.contains(&Focus::PostDetails) => Focus::PostDetails,
            Focus::CommentForm(_) | Focus::PostDetails if ring.contains(&Focus::PostsList) => {
                Focus::PostsList
            }
            _ => Focus::UserSelector,
        };
    }

    /// Advance the spinner while anything is loading
    pub fn tick(&mut self) {
        if self.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

fn step(ring: &[Focus], current: Focus, offset: usize) -> Focus {
    match ring.iter().position(|f| *f == current) {
        Some(i) => ring[(i + offset) % ring.len()],
        None => ring.first().copied().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("user {id}"),
            email: String::new(),
            phone: String::new(),
        }
    }

    fn post(id: i64) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("post {id}"),
            body: String::new(),
        }
    }

    #[test]
    fn test_posts_panel_precedence() {
        let mut state = AppState::new();
        assert_eq!(state.posts_panel(), PostsPanel::NoUserSelected);

        state.selected_user = Some(user(1));
        assert_eq!(state.posts_panel(), PostsPanel::Empty);

        state.posts_error = Some(POSTS_LOAD_ERROR.to_string());
        assert_eq!(state.posts_panel(), PostsPanel::Error);

        state.posts_loading = true;
        assert_eq!(state.posts_panel(), PostsPanel::Loading);

        state.posts_loading = false;
        state.posts_error = None;
        state.posts = vec![post(1)];
        assert_eq!(state.posts_panel(), PostsPanel::List);
    }

    #[test]
    fn test_focus_ring_without_user() {
        let state = AppState::new();
        assert_eq!(state.focus_ring(), vec![Focus::UserSelector]);
    }

    #[test]
    fn test_focus_ring_with_open_post_and_form() {
        let mut state = AppState::new();
        state.selected_user = Some(user(1));
        state.posts = vec![post(1)];
        state.show_sidebar = true;
        state.show_comment_form = true;

        let ring = state.focus_ring();

        assert_eq!(ring.len(), 3 + FormField::ALL.len());
        assert_eq!(ring[2], Focus::PostDetails);
        assert_eq!(ring[3], Focus::CommentForm(FormField::Name));
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut state = AppState::new();
        state.selected_user = Some(user(1));
        state.posts = vec![post(1)];

        state.focus_next();
        assert_eq!(state.focus, Focus::PostsList);
        state.focus_next();
        assert_eq!(state.focus, Focus::UserSelector);
        state.focus_previous();
        assert_eq!(state.focus, Focus::PostsList);
    }

    #[test]
    fn test_ensure_focus_visible_falls_back() {
        let mut state = AppState::new();
        state.selected_user = Some(user(1));
        state.posts = vec![post(1)];
        state.show_sidebar = true;
        state.focus = Focus::CommentForm(FormField::Body);

        state.ensure_focus_visible();
        assert_eq!(state.focus, Focus::PostDetails);

        state.show_sidebar = false;
        state.ensure_focus_visible();
        assert_eq!(state.focus, Focus::PostsList);

        state.posts.clear();
        state.ensure_focus_visible();
        assert_eq!(state.focus, Focus::UserSelector);
    }

    #[test]
    fn test_form_hidden_when_details_error() {
        let mut state = AppState::new();
        state.show_sidebar = true;
        state.show_comment_form = true;
        assert!(state.comment_form_visible());

        state.post_details.set_error("boom");
        assert!(!state.comment_form_visible());
    }

    #[test]
    fn test_tick_only_advances_while_busy() {
        let mut state = AppState::new();
        state.tick();
        assert_eq!(state.spinner_frame, 0);

        state.posts_loading = true;
        state.tick();
        assert_eq!(state.spinner_frame, 1);
    }
}
