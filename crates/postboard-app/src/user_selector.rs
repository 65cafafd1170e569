//! User selector dropdown state
//!
//! Purely local toggle state: whether the dropdown is open and which entry
//! the keyboard highlight is on. The selected user itself is owned by
//! [`AppState`](crate::state::AppState); choosing an entry is reported upward
//! as [`Message::SelectUser`](crate::message::Message::SelectUser).

use postboard_core::User;

/// Button label shown when no user is selected
pub const PLACEHOLDER: &str = "Choose a user";

#[derive(Debug, Clone, Default)]
pub struct UserSelectorState {
    /// Whether the dropdown list is visible
    pub open: bool,

    /// Index into the user list of the highlighted entry
    pub highlighted: usize,
}

impl UserSelectorState {
    /// Open or close the dropdown. Opening moves the highlight onto the
    /// selected user so the active entry is where the operator starts.
    pub fn toggle(&mut self, users: &[User], selected: Option<&User>) {
        if self.open {
            self.close();
            return;
        }

        self.open = true;
        self.highlighted = selected
            .and_then(|sel| users.iter().position(|u| u.id == sel.id))
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn highlight_next(&mut self, user_count: usize) {
        if user_count == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1).min(user_count - 1);
    }

    /// The user under the highlight, if the list is non-empty
    pub fn highlighted_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.get(self.highlighted)
    }

    /// Keep the highlight inside the list after it was replaced
    pub fn clamp(&mut self, user_count: usize) {
        if self.highlighted >= user_count {
            self.highlighted = user_count.saturating_sub(1);
        }
    }
}

/// Label of the dropdown button
pub fn button_label(selected: Option<&User>) -> &str {
    selected.map(|u| u.name.as_str()).unwrap_or(PLACEHOLDER)
}

/// Whether `user` is the active (selected) entry
pub fn is_active(user: &User, selected: Option<&User>) -> bool {
    selected.is_some_and(|sel| sel.id == user.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let users = vec![user(1, "A")];
        let mut state = UserSelectorState::default();

        state.toggle(&users, None);
        assert!(state.open);

        state.toggle(&users, None);
        assert!(!state.open);
    }

    #[test]
    fn test_open_highlights_selected_user() {
        let users = vec![user(1, "A"), user(2, "B"), user(3, "C")];
        let mut state = UserSelectorState::default();

        state.toggle(&users, Some(&users[2]));

        assert_eq!(state.highlighted, 2);
    }

    #[test]
    fn test_highlight_stays_in_bounds() {
        let users = vec![user(1, "A"), user(2, "B")];
        let mut state = UserSelectorState::default();
        state.toggle(&users, None);

        state.highlight_previous();
        assert_eq!(state.highlighted, 0);

        state.highlight_next(users.len());
        state.highlight_next(users.len());
        assert_eq!(state.highlighted, 1);
        assert_eq!(state.highlighted_user(&users).unwrap().name, "B");
    }

    #[test]
    fn test_highlight_next_on_empty_list() {
        let mut state = UserSelectorState::default();
        state.highlight_next(0);
        assert_eq!(state.highlighted, 0);
        assert!(state.highlighted_user(&[]).is_none());
    }

    #[test]
    fn test_button_label() {
        let u = user(1, "Leanne Graham");
        assert_eq!(button_label(None), "Choose a user");
        assert_eq!(button_label(Some(&u)), "Leanne Graham");
    }

    #[test]
    fn test_is_active_compares_ids() {
        let a = user(1, "A");
        let b = user(2, "B");
        assert!(is_active(&a, Some(&a)));
        assert!(!is_active(&b, Some(&a)));
        assert!(!is_active(&a, None));
    }
}
