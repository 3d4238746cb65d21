//! HTTP error responses.
//!
//! Every failure is rendered as:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "graphql_error",
//!     "message": "Shopify returned GraphQL errors",
//!     "details": [{"message": "Access denied"}]
//!   }
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::oauth::OAuthError;
use crate::files::CatalogError;

/// Body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// The error details.
    pub error: ErrorDetail,
}

/// Detailed error information for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. `invalid_request`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Extra context, such as upstream GraphQL errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates an error body with no details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Creates an error body with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }
}

/// Failures a handler can return.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Authorization flow failure.
    #[error(transparent)]
    OAuth(#[from] OAuthError),

    /// Catalog fetch failure.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The request body could not be read.
    #[error("Invalid request body: {reason}")]
    InvalidBody {
        /// Why the body was rejected.
        reason: String,
    },

    /// The query string could not be read.
    #[error("Invalid query string: {reason}")]
    InvalidQuery {
        /// Why the query was rejected.
        reason: String,
    },

    /// A server-side setting the route needs is absent.
    #[error("{what} is not configured")]
    NotConfigured {
        /// The missing setting.
        what: &'static str,
    },
}

impl ServerError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::OAuth(OAuthError::InvalidRequest { .. })
            | Self::Catalog(CatalogError::InvalidRequest { .. } | CatalogError::GraphQl { .. })
            | Self::InvalidBody { .. }
            | Self::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            Self::OAuth(OAuthError::AuthenticationFailed) => StatusCode::UNAUTHORIZED,
            Self::OAuth(
                OAuthError::UpstreamExchangeFailed { .. } | OAuthError::MissingAppConfig { .. },
            )
            | Self::Catalog(CatalogError::FetchFailed(_))
            | Self::NotConfigured { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OAuth(OAuthError::InvalidRequest { .. })
            | Self::Catalog(CatalogError::InvalidRequest { .. })
            | Self::InvalidBody { .. }
            | Self::InvalidQuery { .. } => "invalid_request",
            Self::OAuth(OAuthError::AuthenticationFailed) => "authentication_failed",
            Self::OAuth(OAuthError::UpstreamExchangeFailed { .. }) => "upstream_exchange_failed",
            Self::Catalog(CatalogError::GraphQl { .. }) => "graphql_error",
            Self::Catalog(CatalogError::FetchFailed(_)) => "fetch_failed",
            Self::OAuth(OAuthError::MissingAppConfig { .. }) | Self::NotConfigured { .. } => {
                "not_configured"
            }
        }
    }

    /// Builds the response body. Upstream bodies and transport details are
    /// logged, not returned.
    fn to_api_error(&self) -> ApiError {
        let code = self.error_code();
        match self {
            Self::OAuth(OAuthError::InvalidRequest { reason })
            | Self::Catalog(CatalogError::InvalidRequest { reason }) => {
                ApiError::new(code, reason.clone())
            }
            Self::OAuth(OAuthError::UpstreamExchangeFailed { status, .. }) => ApiError::with_details(
                code,
                "Failed to get access token",
                serde_json::json!({ "upstream_status": status }),
            ),
            Self::Catalog(CatalogError::GraphQl { errors }) => {
                ApiError::with_details(code, "Shopify returned GraphQL errors", errors.clone())
            }
            Self::Catalog(CatalogError::FetchFailed(_)) => {
                ApiError::new(code, "Failed to fetch files")
            }
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }

        (status, Json(self.to_api_error())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_mapping() {
        let cases: Vec<(ServerError, StatusCode, &str)> = vec![
            (
                OAuthError::InvalidRequest {
                    reason: "x".to_string(),
                }
                .into(),
                StatusCode::BAD_REQUEST,
                "invalid_request",
            ),
            (
                OAuthError::AuthenticationFailed.into(),
                StatusCode::UNAUTHORIZED,
                "authentication_failed",
            ),
            (
                OAuthError::UpstreamExchangeFailed {
                    status: 400,
                    message: "bad".to_string(),
                }
                .into(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "upstream_exchange_failed",
            ),
            (
                CatalogError::GraphQl {
                    errors: serde_json::json!([]),
                }
                .into(),
                StatusCode::BAD_REQUEST,
                "graphql_error",
            ),
            (
                ServerError::InvalidQuery {
                    reason: "duplicate field `shop`".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "invalid_request",
            ),
            (
                ServerError::NotConfigured {
                    what: "Standalone credentials",
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "not_configured",
            ),
            (
                OAuthError::MissingAppConfig { field: "CLIENT_ID" }.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "not_configured",
            ),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.status_code(), status, "{error}");
            assert_eq!(error.error_code(), code, "{error}");
        }
    }

    #[test]
    fn test_graphql_errors_are_passed_through_as_details() {
        let errors = serde_json::json!([{"message": "Throttled"}]);
        let body = ServerError::from(CatalogError::GraphQl {
            errors: errors.clone(),
        })
        .to_api_error();

        assert_eq!(body.error.details, Some(errors));
    }

    #[test]
    fn test_exchange_failure_hides_upstream_body() {
        let body = ServerError::from(OAuthError::UpstreamExchangeFailed {
            status: 400,
            message: "secret upstream text".to_string(),
        })
        .to_api_error();

        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("secret upstream text"));
        assert!(json.contains("\"upstream_status\":400"));
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_value(ApiError::new("invalid_request", "Missing shop")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": {"code": "invalid_request", "message": "Missing shop"}})
        );
    }
}
