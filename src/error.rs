//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad value is rejected at startup instead of surfacing as an upstream
//! failure halfway through an OAuth flow.
//!
//! # Example
//!
//! ```rust
//! use shopify_file_catalog::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API secret key cannot be empty.
    #[error("API secret key cannot be empty. Please provide a valid Shopify API secret key.")]
    EmptyApiSecretKey,

    /// Shop domain is blank.
    #[error("Shop domain cannot be empty.")]
    EmptyShopDomain,

    /// Access token is blank.
    #[error("Access token cannot be empty.")]
    EmptyAccessToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2026-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://myapp.example.com/auth/callback').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_env_var_names_variable_and_value() {
        let error = ConfigError::InvalidEnvVar {
            name: "PORT",
            value: "eighty".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("PORT"));
        assert!(message.contains("eighty"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyShopDomain;
        let _: &dyn std::error::Error = &error;
    }
}
