//! Environment-driven settings for the server and CLI.
//!
//! Recognised variables:
//!
//! | Variable               | Meaning                                        |
//! |------------------------|------------------------------------------------|
//! | `CLIENT_ID`            | app API key                                    |
//! | `CLIENT_SECRET`        | app API secret                                 |
//! | `CLIENT_SECRET_OLD`    | previous secret during key rotation            |
//! | `REDIRECT_URI`         | OAuth callback URL                             |
//! | `SCOPES`               | requested scopes (default `read_files`)        |
//! | `API_VERSION`          | Admin API version (default latest)             |
//! | `SHOPIFY_API_ORIGIN`   | upstream origin override                       |
//! | `REQUEST_TIMEOUT_SECS` | per-request timeout (default 30)               |
//! | `SHOP`                 | standalone shop domain                         |
//! | `ACCESS_TOKEN`         | standalone access token                        |
//! | `PORT`                 | listening port (default 3000)                  |
//!
//! Blank values count as unset.

use std::time::Duration;

use crate::auth::Session;
use crate::config::{AccessToken, ApiKey, ApiSecretKey, HostUrl, ShopDomain, ShopifyConfig};
use crate::error::ConfigError;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Settings resolved from the environment.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Shared upstream configuration.
    pub config: ShopifyConfig,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Pre-provisioned shop and token, when both `SHOP` and `ACCESS_TOKEN`
    /// are set.
    pub standalone: Option<Session>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any variable holds an invalid value, or if
    /// only one of `CLIENT_ID` / `CLIENT_SECRET` is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut builder = ShopifyConfig::builder();

        if let Some(key) = get("CLIENT_ID") {
            builder = builder.api_key(ApiKey::new(key)?);
        }
        if let Some(secret) = get("CLIENT_SECRET") {
            builder = builder.api_secret_key(ApiSecretKey::new(secret)?);
        }
        if let Some(old) = get("CLIENT_SECRET_OLD") {
            builder = builder.old_api_secret_key(ApiSecretKey::new(old)?);
        }
        if let Some(uri) = get("REDIRECT_URI") {
            builder = builder.redirect_uri(HostUrl::new(uri)?);
        }
        if let Some(scopes) = get("SCOPES") {
            builder = builder.scopes(scopes.parse()?);
        }
        if let Some(version) = get("API_VERSION") {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(origin) = get("SHOPIFY_API_ORIGIN") {
            builder = builder.upstream_origin(HostUrl::new(origin)?);
        }
        if let Some(secs) = get("REQUEST_TIMEOUT_SECS") {
            let parsed = secs
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidEnvVar {
                    name: "REQUEST_TIMEOUT_SECS",
                    value: secs,
                })?;
            builder = builder.request_timeout(Duration::from_secs(parsed));
        }

        let port = match get("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT",
                    value: port,
                })?,
            None => DEFAULT_PORT,
        };

        let standalone = match (get("SHOP"), get("ACCESS_TOKEN")) {
            (Some(shop), Some(token)) => Some(Session::new(
                ShopDomain::new(shop)?,
                AccessToken::new(token)?,
            )),
            _ => None,
        };

        Ok(Self {
            config: builder.build()?,
            port,
            standalone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert!(settings.standalone.is_none());
        assert!(settings.config.api_key().is_none());
        assert_eq!(settings.config.scopes().to_string(), "read_files");
    }

    #[test]
    fn test_full_environment() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CLIENT_ID", "client"),
            ("CLIENT_SECRET", "secret"),
            ("REDIRECT_URI", "http://localhost:3000/auth/callback"),
            ("SCOPES", "read_files,read_products"),
            ("API_VERSION", "2025-10"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SHOP", "store.myshopify.com"),
            ("ACCESS_TOKEN", "shpat_123"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.config.api_key().unwrap().as_ref(), "client");
        assert_eq!(settings.config.request_timeout(), Duration::from_secs(5));
        assert_eq!(settings.config.api_version().to_string(), "2025-10");
        let standalone = settings.standalone.unwrap();
        assert_eq!(standalone.shop.as_ref(), "store.myshopify.com");
        assert_eq!(standalone.access_token.as_ref(), "shpat_123");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings =
            Settings::from_lookup(lookup_from(&[("SHOP", "  "), ("ACCESS_TOKEN", "tok")])).unwrap();
        assert!(settings.standalone.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { name: "PORT", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar {
                name: "REQUEST_TIMEOUT_SECS",
                ..
            })
        ));
    }

    #[test]
    fn test_client_id_without_secret_is_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("CLIENT_ID", "client")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { .. })
        ));
    }
}
