//! OAuth callback validation and code exchange.
//!
//! After the merchant approves the app, Shopify redirects to the callback
//! URL with `shop`, `code`, `hmac` and a few other signed parameters.
//! [`validate_auth_callback`]:
//!
//! 1. verifies the HMAC signature, making no network call if it fails
//! 2. checks that `shop` and `code` are present
//! 3. exchanges `code` for an access token
//! 4. returns a [`Session`] ready for API calls
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_file_catalog::auth::oauth::{validate_auth_callback, CallbackParams};
//!
//! let params = CallbackParams::from_pairs(query_pairs);
//! let session = validate_auth_callback(&config, &params).await?;
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::hmac::validate_hmac;
use crate::auth::oauth::CallbackParams;
use crate::auth::session::AccessTokenResponse;
use crate::auth::Session;
use crate::config::{AccessToken, ShopDomain, ShopifyConfig};

/// Request body for the code exchange.
#[derive(serde::Serialize)]
struct TokenExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// Validates an OAuth callback and exchanges the code for an access token.
///
/// # Errors
///
/// - [`OAuthError::AuthenticationFailed`]: signature missing or invalid
/// - [`OAuthError::InvalidRequest`]: `shop` or `code` missing
/// - [`OAuthError::MissingAppConfig`]: API key or secret not configured
/// - [`OAuthError::UpstreamExchangeFailed`]: the exchange request failed,
///   timed out, returned a non-success status, or returned no token
pub async fn validate_auth_callback(
    config: &ShopifyConfig,
    params: &CallbackParams,
) -> Result<Session, OAuthError> {
    if !validate_hmac(params, config) {
        tracing::warn!(shop = ?params.shop(), "rejected OAuth callback with invalid HMAC");
        return Err(OAuthError::AuthenticationFailed);
    }

    let (Some(shop), Some(code)) = (params.shop(), params.code()) else {
        return Err(OAuthError::InvalidRequest {
            reason: "Missing shop or code parameter".to_string(),
        });
    };
    let shop = ShopDomain::new(shop).map_err(|_| OAuthError::InvalidRequest {
        reason: "Missing shop or code parameter".to_string(),
    })?;

    let api_key = config
        .api_key()
        .ok_or(OAuthError::MissingAppConfig { field: "CLIENT_ID" })?;
    let api_secret_key = config
        .api_secret_key()
        .ok_or(OAuthError::MissingAppConfig {
            field: "CLIENT_SECRET",
        })?;

    let token_url = format!("{}/admin/oauth/access_token", config.base_uri_for(&shop));

    let request_body = TokenExchangeRequest {
        client_id: api_key.as_ref(),
        client_secret: api_secret_key.as_ref(),
        code,
    };

    // Unauthenticated request, so reqwest is used directly
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| OAuthError::UpstreamExchangeFailed {
            status: 0,
            message: format!("Failed to build HTTP client: {e}"),
        })?;

    let response = client
        .post(&token_url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(shop = %shop, error = %e, "token exchange request failed");
            OAuthError::UpstreamExchangeFailed {
                status: 0,
                message: format!("Network error: {e}"),
            }
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::error!(shop = %shop, status, "token exchange rejected");
        return Err(OAuthError::UpstreamExchangeFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse =
        response
            .json()
            .await
            .map_err(|e| OAuthError::UpstreamExchangeFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

    let access_token = token_response
        .access_token
        .as_deref()
        .and_then(|t| AccessToken::new(t).ok())
        .ok_or_else(|| OAuthError::UpstreamExchangeFailed {
            status,
            message: "Token response did not include an access_token".to_string(),
        })?;

    let session = Session::from_access_token_response(shop, access_token, &token_response);

    if !session.scopes.is_empty() && !session.scopes.covers(config.scopes()) {
        tracing::warn!(
            shop = %session.shop,
            granted = %session.scopes,
            requested = %config.scopes(),
            "granted scopes do not cover requested scopes"
        );
    }
    tracing::info!(shop = %session.shop, "completed OAuth code exchange");

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::oauth::hmac::compute_signature;
    use crate::config::{ApiKey, ApiSecretKey, HostUrl};
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config(origin: &str) -> ShopifyConfig {
        ShopifyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .upstream_origin(HostUrl::new(origin).unwrap())
            .build()
            .unwrap()
    }

    fn create_signed_params(secret: &str) -> CallbackParams {
        let mut params = CallbackParams::from_pairs([
            ("code", "auth-code-123"),
            ("shop", "test-shop.myshopify.com"),
            ("state", "test-state"),
            ("timestamp", "1700000000"),
        ]);
        let signature = compute_signature(&params.to_signable_string(), secret);
        params.insert("hmac", signature);
        params
    }

    async fn mount_token_endpoint(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token"))
            .and(body_json(serde_json::json!({
                "client_id": "test-api-key",
                "client_secret": "test-secret",
                "code": "auth-code-123"
            })))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_validate_auth_callback_returns_session_on_success() {
        let server = MockServer::start().await;
        mount_token_endpoint(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "shpat_new",
                "scope": "read_files"
            })),
        )
        .await;

        let config = create_test_config(&server.uri());
        let session = validate_auth_callback(&config, &create_signed_params("test-secret"))
            .await
            .unwrap();

        assert_eq!(session.shop.as_ref(), "test-shop.myshopify.com");
        assert_eq!(session.access_token.as_ref(), "shpat_new");
        assert_eq!(session.scopes.to_string(), "read_files");
    }

    #[tokio::test]
    async fn test_invalid_hmac_makes_no_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = create_test_config(&server.uri());
        let mut params = create_signed_params("test-secret");
        params.insert("hmac", "0".repeat(64));

        let result = validate_auth_callback(&config, &params).await;
        assert!(matches!(result, Err(OAuthError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_missing_hmac_is_authentication_failure() {
        let config = create_test_config("http://127.0.0.1:1");
        let params = CallbackParams::from_pairs([("code", "c"), ("shop", "s.myshopify.com")]);

        let result = validate_auth_callback(&config, &params).await;
        assert!(matches!(result, Err(OAuthError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_missing_code_is_invalid_request() {
        let config = create_test_config("http://127.0.0.1:1");
        let mut params = CallbackParams::from_pairs([("shop", "test-shop.myshopify.com")]);
        let signature = compute_signature(&params.to_signable_string(), "test-secret");
        params.insert("hmac", signature);

        let result = validate_auth_callback(&config, &params).await;
        assert!(matches!(result, Err(OAuthError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn test_upstream_rejection_carries_status_and_body() {
        let server = MockServer::start().await;
        mount_token_endpoint(
            &server,
            ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_request"}"#),
        )
        .await;

        let config = create_test_config(&server.uri());
        let result = validate_auth_callback(&config, &create_signed_params("test-secret")).await;

        match result {
            Err(OAuthError::UpstreamExchangeFailed { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("invalid_request"));
            }
            other => panic!("Expected UpstreamExchangeFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_response_without_token_is_exchange_failure() {
        let server = MockServer::start().await;
        mount_token_endpoint(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"scope": "read_files"})),
        )
        .await;

        let config = create_test_config(&server.uri());
        let result = validate_auth_callback(&config, &create_signed_params("test-secret")).await;

        assert!(matches!(
            result,
            Err(OAuthError::UpstreamExchangeFailed { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_exchange_timeout_is_exchange_failure() {
        let server = MockServer::start().await;
        mount_token_endpoint(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "late"}))
                .set_delay(Duration::from_secs(5)),
        )
        .await;

        let config = ShopifyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .upstream_origin(HostUrl::new(server.uri()).unwrap())
            .request_timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let result = validate_auth_callback(&config, &create_signed_params("test-secret")).await;

        assert!(matches!(
            result,
            Err(OAuthError::UpstreamExchangeFailed { status: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_old_secret_signature_is_accepted() {
        let server = MockServer::start().await;
        mount_token_endpoint(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "shpat_rotated"
            })),
        )
        .await;

        let config = ShopifyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .old_api_secret_key(ApiSecretKey::new("old-secret").unwrap())
            .upstream_origin(HostUrl::new(server.uri()).unwrap())
            .build()
            .unwrap();

        let session = validate_auth_callback(&config, &create_signed_params("old-secret"))
            .await
            .unwrap();
        assert_eq!(session.access_token.as_ref(), "shpat_rotated");
    }
}
