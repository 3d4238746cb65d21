//! GraphQL client for the Shopify Admin API.
//!
//! - [`GraphqlClient`]: executes queries with variables
//! - [`GraphqlError`]: HTTP-level failures
//!
//! # Response Structure
//!
//! GraphQL responses carry these fields in the body:
//!
//! - `data`: the query result
//! - `errors`: GraphQL errors (still HTTP 200)
//! - `extensions`: query cost information

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
