//! OAuth 2.0 authorization code flow for Shopify apps.
//!
//! 1. **Authorization Initiation** ([`begin_auth`]): build the authorization
//!    URL and redirect the merchant to Shopify.
//! 2. **Callback Validation** ([`validate_auth_callback`]): verify the
//!    callback signature and exchange the code for an access token.
//!
//! # Security Features
//!
//! - **HMAC Validation**: callbacks are verified with HMAC-SHA256 before
//!   any other processing
//! - **Constant-Time Comparison**: digests are compared in constant time
//! - **Key Rotation Support**: an old API secret key can be configured so
//!   callbacks signed before a rotation still verify
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_file_catalog::auth::oauth::{begin_auth, validate_auth_callback, CallbackParams};
//!
//! let result = begin_auth(&config, Some("example-shop.myshopify.com"))?;
//! // redirect to result.auth_url
//!
//! // in the callback handler
//! let session = validate_auth_callback(&config, &params).await?;
//! println!("Authenticated shop: {}", session.shop);
//! ```

mod begin_auth;
mod callback_params;
mod error;
pub mod hmac;
mod validate_callback;

pub use begin_auth::{begin_auth, BeginAuthResult};
pub use callback_params::{CallbackParams, HMAC_PARAM};
pub use error::OAuthError;
pub use validate_callback::validate_auth_callback;
