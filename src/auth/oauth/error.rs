//! OAuth-specific error types.
//!
//! # Example
//!
//! ```rust
//! use shopify_file_catalog::auth::oauth::OAuthError;
//!
//! let error = OAuthError::AuthenticationFailed;
//! assert_eq!(error.to_string(), "HMAC signature validation failed");
//! ```

use thiserror::Error;

/// Errors that can occur during the authorization code flow.
///
/// `OAuthError` is `Send + Sync`, so it can cross async boundaries.
///
/// ```rust
/// use shopify_file_catalog::auth::oauth::OAuthError;
///
/// fn describe(err: &OAuthError) -> &'static str {
///     match err {
///         OAuthError::InvalidRequest { .. } => "bad request",
///         OAuthError::AuthenticationFailed => "bad signature",
///         OAuthError::UpstreamExchangeFailed { .. } => "shopify refused",
///         OAuthError::MissingAppConfig { .. } => "server misconfigured",
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// A required request parameter is missing or malformed.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request.
        reason: String,
    },

    /// The callback signature did not verify against any configured secret.
    ///
    /// No network call is made once this is returned.
    #[error("HMAC signature validation failed")]
    AuthenticationFailed,

    /// The code exchange with Shopify failed.
    ///
    /// `status` is the upstream HTTP status, or `0` when the request never
    /// produced a response (connection failure, timeout).
    #[error("Token exchange failed with status {status}: {message}")]
    UpstreamExchangeFailed {
        /// The HTTP status code returned, `0` on transport failure.
        status: u16,
        /// The response body or transport error.
        message: String,
    },

    /// An app credential the flow needs is not configured.
    #[error("{field} must be configured for OAuth")]
    MissingAppConfig {
        /// The missing setting.
        field: &'static str,
    },
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
