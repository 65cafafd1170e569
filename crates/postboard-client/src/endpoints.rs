//! Paths of the endpoints consumed from the data service
//!
//! Paths are appended verbatim to the configured base URL.

/// `GET` — every user
pub const USERS: &str = "/users";

/// `POST` — create a comment
pub const COMMENTS: &str = "/comments";

/// `GET` — posts whose `userId` equals `user_id`
pub fn posts_for_user(user_id: i64) -> String {
    format!("/posts?userId={user_id}")
}

/// `GET` — comments whose `postId` equals `post_id`
pub fn comments_for_post(post_id: i64) -> String {
    format!("/comments?postId={post_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_filter_uses_user_id_query() {
        assert_eq!(posts_for_user(4), "/posts?userId=4");
    }

    #[test]
    fn test_comments_filter_uses_post_id_query() {
        assert_eq!(comments_for_post(17), "/comments?postId=17");
    }
}
