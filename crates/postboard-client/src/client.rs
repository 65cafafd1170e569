//! HTTP client for the data service

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use postboard_core::prelude::*;
use postboard_core::{Comment, NewComment, Post, User};

use crate::endpoints;
use crate::source::DataSource;

/// Base URL used when neither the build nor the configuration provides one.
pub const DEFAULT_BASE_URL: &str = match option_env!("POSTBOARD_BASE_URL") {
    Some(url) => url,
    None => "https://mate.academy/students-api",
};

/// JSON-over-HTTP client bound to one base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared `reqwest` client.
    http: reqwest::Client,
    /// Base URL without a trailing slash; endpoint paths are appended to it.
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if `base_url` is not an absolute
    /// http(s) URL, or [`Error::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("base_url '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "base_url '{base_url}': unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}{path}` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    /// `POST {base}{path}` with a JSON body and decode the JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::request(format!("{method} {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned {}", method, path, status);
            return Err(Error::request(format!("{method} {path}: HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::request(format!("{method} {path}: {e}")))?;

        serde_json::from_slice(&bytes).map_err(|e| Error::decode(format!("{method} {path}: {e}")))
    }
}

impl DataSource for ApiClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.get(endpoints::USERS).await
    }

    async fn fetch_posts(&self, user_id: i64) -> Result<Vec<Post>> {
        self.get(&endpoints::posts_for_user(user_id)).await
    }

    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get(&endpoints::comments_for_post(post_id)).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        self.post(endpoints::COMMENTS, comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&format!("{}/api", server.uri())).unwrap()
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let err = ApiClient::new("students-api").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        let err = ApiClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ApiClient::new("https://example.com/api/").unwrap();
        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[tokio::test]
    async fn test_fetch_users_decodes_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Leanne Graham", "email": "l@g.com", "phone": "1"},
                {"id": 2, "name": "Ervin Howell", "email": "e@h.com", "phone": "2"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).await.fetch_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Ervin Howell");
    }

    #[tokio::test]
    async fn test_fetch_posts_filters_by_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .and(query_param("userId", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 21, "userId": 3, "title": "first", "body": "..."}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client_for(&server).await.fetch_posts(3).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 3);
    }

    #[tokio::test]
    async fn test_fetch_comments_filters_by_post_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/comments"))
            .and(query_param("postId", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let comments = client_for(&server).await.fetch_comments(7).await.unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_create_comment_posts_payload_and_returns_created_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/comments"))
            .and(body_json(json!({
                "postId": 7, "name": "A", "email": "a@b.com", "body": "hi"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 501, "postId": 7, "name": "A", "email": "a@b.com", "body": "hi"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = NewComment {
            post_id: 7,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            body: "hi".to_string(),
        };
        let created = client_for(&server)
            .await
            .create_comment(&payload)
            .await
            .unwrap();

        assert_eq!(created.id, 501);
        assert_eq!(created.post_id, 7);
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_users().await.unwrap_err();

        assert!(matches!(err, Error::Request { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_not_found_is_request_error() {
        let server = MockServer::start().await;

        // No mocks mounted: wiremock answers 404
        let err = client_for(&server).await.fetch_posts(1).await.unwrap_err();

        assert!(matches!(err, Error::Request { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_posts(1).await.unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let server = MockServer::start().await;
        let base = format!("{}/api", server.uri());
        drop(server);

        let client = ApiClient::new(&base).unwrap();
        let err = client.fetch_users().await.unwrap_err();

        assert!(matches!(err, Error::Request { .. }));
    }
}
