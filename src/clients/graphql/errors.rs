//! GraphQL-specific error types.
//!
//! Only HTTP-level failures are errors here. GraphQL-level errors come back
//! with HTTP 200 in the body's `errors` field and are interpreted by the
//! caller.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// ```rust
/// use shopify_file_catalog::clients::graphql::GraphqlError;
/// use shopify_file_catalog::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"error":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred: network failure, timeout, non-2xx
    /// response, or a malformed body.
    #[error(transparent)]
    Http(#[from] HttpError),
}
