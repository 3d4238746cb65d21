//! Errors from fetching a file catalog.

use thiserror::Error;

use crate::clients::GraphqlError;

/// Errors that can occur while fetching a file catalog.
///
/// Any error aborts the whole fetch; pages merged before it are discarded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The shop or access token was missing.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// What was missing.
        reason: String,
    },

    /// Shopify answered with GraphQL `errors`.
    #[error("GraphQL query returned errors: {errors}")]
    GraphQl {
        /// The `errors` value, passed through unchanged.
        errors: serde_json::Value,
    },

    /// The request failed in transport, timed out, returned a non-2xx
    /// status, or returned a body that is not a files page.
    #[error("Failed to fetch files: {0}")]
    FetchFailed(#[from] GraphqlError),
}

// Verify CatalogError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogError>();
};
