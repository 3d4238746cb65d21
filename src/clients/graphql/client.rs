//! GraphQL client implementation for the Shopify Admin API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries against `/admin/api/{version}/graphql.json`.

use crate::auth::Session;
use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// GraphQL API client for the Shopify Admin API.
///
/// GraphQL-level errors arrive with HTTP 200 and are left in
/// `response.body["errors"]` for the caller to inspect.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_file_catalog::clients::GraphqlClient;
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&session, &config)?;
///
/// let response = client
///     .query(
///         "query getFiles($cursor: String) { files(first: 1, after: $cursor) { edges { cursor } } }",
///         Some(json!({ "cursor": null })),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given session, using the API
    /// version from `config`.
    ///
    /// Logs a warning when the configured version is past its support
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn new(session: &Session, config: &ShopifyConfig) -> Result<Self, GraphqlError> {
        let api_version = config.api_version().clone();

        if api_version.is_deprecated() {
            tracing::warn!(
                "Admin API version {} is below the minimum supported version {}",
                api_version,
                ApiVersion::minimum_supported()
            );
        }

        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, session, config)?;

        Ok(Self { http_client })
    }

    /// Executes a GraphQL query against the Admin API.
    ///
    /// The body is `{"query": ..., "variables": ...}`; `variables` is sent as
    /// `null` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors (network errors,
    /// timeouts, non-2xx responses, malformed bodies).
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables
        });

        let request = HttpRequest::post_json("graphql.json", body);
        self.http_client.request(request).await.map_err(Into::into)
    }
}
