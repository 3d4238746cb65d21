//! # Shopify File Catalog
//!
//! Lists every file stored in a Shopify shop, after obtaining an Admin API
//! token through the OAuth authorization code flow.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - OAuth: authorization URL, callback signature check and code exchange
//!   via [`auth::oauth`]
//! - Cursor-paginated retrieval of the shop's files via [`files`], flattened
//!   into `{filename, url}` records
//! - An axum HTTP surface in [`server`]
//! - CSV export and bulk download in [`export`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_file_catalog::{ShopifyConfig, ApiKey, ApiSecretKey, ApiVersion, HostUrl};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .redirect_uri(HostUrl::new("https://your-app.com/auth/callback").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scopes().to_string(), "read_files");
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use shopify_file_catalog::auth::oauth::{begin_auth, validate_auth_callback};
//!
//! // Step 1: send the merchant to Shopify
//! let result = begin_auth(&config, Some("example-shop.myshopify.com"))?;
//! // Redirect user to result.auth_url
//!
//! // Step 2: handle the callback
//! let session = validate_auth_callback(&config, &params).await?;
//! ```
//!
//! ## Listing Files
//!
//! ```rust,ignore
//! use shopify_file_catalog::files::FileCatalogFetcher;
//!
//! let fetcher = FileCatalogFetcher::new(config);
//! let catalog = fetcher.fetch_all(&session).await?;
//! for file in &catalog.files {
//!     println!("{} {}", file.filename, file.url);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **All or nothing**: A catalog is returned only if every page succeeded

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod export;
pub mod files;
pub mod server;

// Re-export public types at crate root for convenience
pub use auth::{AuthScopes, Session};
pub use config::{
    AccessToken, ApiKey, ApiSecretKey, ApiVersion, HostUrl, Settings, ShopDomain, ShopifyConfig,
    ShopifyConfigBuilder,
};
pub use error::ConfigError;

pub use auth::oauth::{begin_auth, validate_auth_callback, BeginAuthResult, OAuthError};
pub use files::{CatalogError, FileCatalog, FileCatalogFetcher, FileRecord};
