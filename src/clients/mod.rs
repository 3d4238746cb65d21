//! HTTP client types for Shopify Admin API communication.
//!
//! - [`HttpClient`]: async HTTP client bound to one session
//! - [`HttpRequest`]: a JSON POST to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`graphql::GraphqlClient`]: GraphQL client built on [`HttpClient`]
//!
//! Requests are attempted once with the configured timeout. There is no
//! automatic retry.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpRequest, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
