//! Errors raised while talking to the Admin API.
//!
//! [`HttpError`] is what [`HttpClient::request`](crate::clients::HttpClient::request)
//! returns. Callers above the transport usually only need to know whether
//! the failure was a timeout ([`HttpError::is_timeout`]).
//!
//! ```rust,ignore
//! use shopify_file_catalog::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(e) if e.is_timeout() => println!("gave up waiting"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// A non-2xx answer from the Admin API.
///
/// `message` is a compact JSON object built from the response's `errors`,
/// `error`, `error_description` and raw body, whichever were present.
///
/// ```rust
/// use shopify_file_catalog::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     message: r#"{"errors":"Forbidden"}"#.to_string(),
///     error_reference: Some("f1d3-9a".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"{"errors":"Forbidden"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// Response status.
    pub code: u16,
    /// Serialized error fields.
    pub message: String,
    /// `X-Request-Id` of the failed call, for support tickets.
    pub error_reference: Option<String>,
}

/// Transport-level failure of an Admin API call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Shopify answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Shopify answered 2xx but the body is not JSON.
    #[error("Response with status {code} has a malformed body: {source}")]
    MalformedBody {
        /// Response status.
        code: u16,
        /// The JSON parse failure.
        source: serde_json::Error,
    },

    /// Connection failure or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// `true` if the configured request timeout expired.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
