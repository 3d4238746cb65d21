//! Configuration types.
//!
//! Everything the OAuth exchange and the file catalog fetcher need is held
//! in a [`ShopifyConfig`] value that callers build once and pass in
//! explicitly. Nothing in the crate reads process-wide state on its own;
//! [`Settings`] is the one place that turns environment variables into a
//! config, and only the binary calls it.
//!
//! # Overview
//!
//! - [`ShopifyConfig`] / [`ShopifyConfigBuilder`]: app credentials, scopes,
//!   callback URL, API version, upstream origin and request timeout
//! - [`ApiKey`], [`ApiSecretKey`], [`ShopDomain`], [`AccessToken`],
//!   [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: Admin API version used in the GraphQL path
//! - [`Settings`]: environment-driven server settings
//!
//! # Example
//!
//! ```rust
//! use shopify_file_catalog::{ShopifyConfig, ApiKey, ApiSecretKey, HostUrl};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .redirect_uri(HostUrl::new("https://myapp.example.com/auth/callback").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scopes().to_string(), "read_files");
//! ```

mod env;
mod newtypes;
mod version;

pub use env::Settings;
pub use newtypes::{AccessToken, ApiKey, ApiSecretKey, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::time::Duration;

use crate::auth::scopes::DEFAULT_SCOPES;
use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default timeout applied to every outbound request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by the OAuth exchange and the catalog fetcher.
///
/// App credentials are optional so that a standalone deployment (shop and
/// token supplied up front) can run without an OAuth app. The OAuth entry
/// points report a missing credential when they need one.
///
/// # Key Rotation
///
/// `old_api_secret_key` lets callbacks signed with the previous secret
/// still verify while a rotation is in progress.
///
/// # Upstream Origin
///
/// By default every upstream URL is `https://{shop}/...`. Setting
/// `upstream_origin` sends all OAuth and GraphQL traffic to that origin
/// instead, which is how a local proxy or a mock upstream is wired in.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    old_api_secret_key: Option<ApiSecretKey>,
    scopes: AuthScopes,
    redirect_uri: Option<HostUrl>,
    api_version: ApiVersion,
    upstream_origin: Option<HostUrl>,
    request_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the API secret key, if configured.
    #[must_use]
    pub const fn api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.api_secret_key.as_ref()
    }

    /// Returns the previous API secret key, if configured.
    #[must_use]
    pub const fn old_api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.old_api_secret_key.as_ref()
    }

    /// Returns the scopes requested during authorization.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the OAuth callback URL, if configured.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&HostUrl> {
        self.redirect_uri.as_ref()
    }

    /// Returns the Admin API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the upstream origin override, if configured.
    #[must_use]
    pub const fn upstream_origin(&self) -> Option<&HostUrl> {
        self.upstream_origin.as_ref()
    }

    /// Returns the timeout applied to each outbound request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URI for requests concerning `shop`.
    ///
    /// This is the upstream origin override when one is set, otherwise
    /// `https://{shop}`. The result never ends with a slash.
    #[must_use]
    pub fn base_uri_for(&self, shop: &ShopDomain) -> String {
        self.upstream_origin.as_ref().map_or_else(
            || format!("https://{}", shop.as_ref().trim_end_matches('/')),
            |origin| origin.origin().to_string(),
        )
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// # Defaults
///
/// - `scopes`: `read_files`
/// - `api_version`: [`ApiVersion::latest`]
/// - `request_timeout`: 30 seconds
/// - everything else: unset
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    old_api_secret_key: Option<ApiSecretKey>,
    scopes: Option<AuthScopes>,
    redirect_uri: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    upstream_origin: Option<HostUrl>,
    request_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (the app's client id).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key.
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the previous API secret key for key rotation support.
    #[must_use]
    pub fn old_api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.old_api_secret_key = Some(key);
        self
    }

    /// Sets the scopes requested during authorization.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the OAuth callback URL.
    #[must_use]
    pub fn redirect_uri(mut self, url: HostUrl) -> Self {
        self.redirect_uri = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes all upstream traffic to `origin` instead of `https://{shop}`.
    #[must_use]
    pub fn upstream_origin(mut self, origin: HostUrl) -> Self {
        self.upstream_origin = Some(origin);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if an old secret is set
    /// without a current one, or if the API key and secret are not set
    /// together.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        if self.old_api_secret_key.is_some() && self.api_secret_key.is_none() {
            return Err(ConfigError::MissingRequiredField {
                field: "api_secret_key",
            });
        }
        match (&self.api_key, &self.api_secret_key) {
            (Some(_), None) => {
                return Err(ConfigError::MissingRequiredField {
                    field: "api_secret_key",
                })
            }
            (None, Some(_)) => return Err(ConfigError::MissingRequiredField { field: "api_key" }),
            _ => {}
        }

        let scopes = match self.scopes {
            Some(scopes) if !scopes.is_empty() => scopes,
            _ => DEFAULT_SCOPES.parse()?,
        };

        Ok(ShopifyConfig {
            api_key: self.api_key,
            api_secret_key: self.api_secret_key,
            old_api_secret_key: self.old_api_secret_key,
            scopes,
            redirect_uri: self.redirect_uri,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            upstream_origin: self.upstream_origin,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
