//! Outbound Admin API requests.

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON POST relative to an [`HttpClient`](crate::clients::HttpClient)'s
/// base path. Every Admin API call this crate makes has this shape.
///
/// ```rust
/// use shopify_file_catalog::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::post_json("graphql.json", json!({"query": "{ shop { name } }"}));
///
/// assert_eq!(
///     request.url("https://my-store.myshopify.com", "/admin/api/2026-01"),
///     "https://my-store.myshopify.com/admin/api/2026-01/graphql.json"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Path below the client's base path, e.g. `graphql.json`.
    pub path: String,
    /// JSON body.
    pub body: serde_json::Value,
}

impl HttpRequest {
    /// A POST carrying `body` as JSON.
    #[must_use]
    pub fn post_json(path: impl Into<String>, body: impl Into<serde_json::Value>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }

    /// Joins `base_uri`, `base_path` and the request path with single
    /// slashes.
    #[must_use]
    pub fn url(&self, base_uri: &str, base_path: &str) -> String {
        format!(
            "{}/{}/{}",
            base_uri.trim_end_matches('/'),
            base_path.trim_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}
