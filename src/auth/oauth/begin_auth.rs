//! OAuth authorization URL generation.
//!
//! [`begin_auth`] is the first step of the authorization code flow: it
//! builds the URL the merchant is redirected to so they can grant the app
//! access to their shop.
//!
//! # Example
//!
//! ```rust
//! use shopify_file_catalog::{ApiKey, ApiSecretKey, HostUrl, ShopifyConfig};
//! use shopify_file_catalog::auth::oauth::begin_auth;
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
//!     .redirect_uri(HostUrl::new("https://your-app.com/auth/callback").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let result = begin_auth(&config, Some("example-shop.myshopify.com")).unwrap();
//! assert!(result
//!     .auth_url
//!     .starts_with("https://example-shop.myshopify.com/admin/oauth/authorize?"));
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::config::{ShopDomain, ShopifyConfig};

/// Result of initiating OAuth authorization.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// The shop the authorization targets.
    pub shop: ShopDomain,

    /// The full authorization URL to redirect the merchant to.
    pub auth_url: String,
}

/// Builds the authorization URL for `shop`.
///
/// The URL is `{base}/admin/oauth/authorize` carrying `client_id`, `scope`,
/// `redirect_uri` and `response_type=code`, each percent-encoded. `base` is
/// `https://{shop}` unless an upstream origin override is configured.
///
/// `shop` is taken as an `Option` so a request handler can pass a query
/// parameter straight through.
///
/// # Errors
///
/// - [`OAuthError::InvalidRequest`] if `shop` is absent or blank
/// - [`OAuthError::MissingAppConfig`] if the API key or redirect URI is not
///   configured
pub fn begin_auth(
    config: &ShopifyConfig,
    shop: Option<&str>,
) -> Result<BeginAuthResult, OAuthError> {
    let shop = shop
        .and_then(|s| ShopDomain::new(s).ok())
        .ok_or_else(|| OAuthError::InvalidRequest {
            reason: "Missing shop parameter".to_string(),
        })?;

    let api_key = config
        .api_key()
        .ok_or(OAuthError::MissingAppConfig { field: "CLIENT_ID" })?;
    let redirect_uri = config
        .redirect_uri()
        .ok_or(OAuthError::MissingAppConfig {
            field: "REDIRECT_URI",
        })?;

    let params = [
        ("client_id", api_key.as_ref().to_string()),
        ("scope", config.scopes().to_string()),
        ("redirect_uri", redirect_uri.as_ref().to_string()),
        ("response_type", "code".to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!(
        "{}/admin/oauth/authorize?{}",
        config.base_uri_for(&shop),
        query_string
    );

    tracing::debug!(shop = %shop, "built authorization url");

    Ok(BeginAuthResult { shop, auth_url })
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};
