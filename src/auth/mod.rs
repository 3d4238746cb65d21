//! Authentication types.
//!
//! - [`AuthScopes`]: requested and granted OAuth scopes
//! - [`Session`]: a shop plus the access token for it
//! - [`oauth`]: the authorization code flow (redirect URL, callback
//!   verification, code exchange)
//!
//! # OAuth Flow
//!
//! ```rust,ignore
//! use shopify_file_catalog::auth::oauth::{begin_auth, validate_auth_callback};
//!
//! // 1. Send the merchant to Shopify
//! let result = begin_auth(&config, Some("my-store.myshopify.com"))?;
//! // redirect to result.auth_url
//!
//! // 2. Verify the callback and exchange the code
//! let session = validate_auth_callback(&config, &params).await?;
//! ```

pub mod oauth;
pub mod scopes;
pub mod session;

pub use scopes::AuthScopes;
pub use session::Session;
