//! HMAC validation for OAuth callbacks.
//!
//! Shopify signs the callback query string with HMAC-SHA256 keyed by the
//! app secret and sends the lowercase hex digest in the `hmac` parameter.
//!
//! # Security
//!
//! Digest comparison is constant-time. When the primary secret does not
//! match, the previous secret (if configured) is tried so that callbacks
//! issued before a key rotation still verify.
//!
//! # Example
//!
//! ```rust
//! use shopify_file_catalog::auth::oauth::hmac::compute_signature;
//!
//! let message = "code=abc123&shop=example.myshopify.com&timestamp=1337178173";
//! let signature = compute_signature(message, "my-api-secret");
//! assert_eq!(signature.len(), 64);
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::oauth::CallbackParams;
use crate::config::ShopifyConfig;

type HmacSha256 = Hmac<Sha256>;

/// Computes an HMAC-SHA256 signature for the given message.
///
/// Returns the digest as lowercase hex, the same form Shopify uses.
///
/// ```rust
/// use shopify_file_catalog::auth::oauth::hmac::compute_signature;
///
/// assert_eq!(
///     compute_signature("message", "key"),
///     "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
/// );
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

/// Performs constant-time comparison of two strings.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Validates the `hmac` parameter of an OAuth callback.
///
/// Returns `false` when the parameter is missing, when no secret is
/// configured, or when neither the primary nor the previous secret
/// produces a matching digest.
#[must_use]
pub fn validate_hmac(params: &CallbackParams, config: &ShopifyConfig) -> bool {
    let Some(received_hmac) = params.hmac() else {
        return false;
    };
    let signable = params.to_signable_string();

    config
        .api_secret_key()
        .into_iter()
        .chain(config.old_api_secret_key())
        .any(|secret| {
            let computed = compute_signature(&signable, secret.as_ref());
            constant_time_compare(&computed, received_hmac)
        })
}

mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiSecretKey};

    const DOC_HMAC: &str = "700e2dadb827fcc8609e9d5ce208b2e9cdaab9df07390d2cbca10d7c328fc4bf";

    fn config_with(secret: &str, old: Option<&str>) -> ShopifyConfig {
        let mut builder = ShopifyConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .api_secret_key(ApiSecretKey::new(secret).unwrap());
        if let Some(old) = old {
            builder = builder.old_api_secret_key(ApiSecretKey::new(old).unwrap());
        }
        builder.build().unwrap()
    }

    fn doc_params(hmac: &str) -> CallbackParams {
        CallbackParams::from_pairs([
            ("code", "0907a61c0c8d55e99db179b68161bc00"),
            ("hmac", hmac),
            ("shop", "some-shop.myshopify.com"),
            ("state", "0.6784241404160823"),
            ("timestamp", "1337178173"),
        ])
    }

    #[test]
    fn test_compute_signature_matches_known_value() {
        assert_eq!(
            compute_signature("message", "key"),
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_compute_signature_is_lowercase_hex() {
        let sig = compute_signature("", "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signable_string_digest_matches_reference() {
        let params = doc_params(DOC_HMAC);
        assert_eq!(compute_signature(&params.to_signable_string(), "hush"), DOC_HMAC);
    }

    #[test]
    fn test_validate_hmac_accepts_reference_callback() {
        assert!(validate_hmac(&doc_params(DOC_HMAC), &config_with("hush", None)));
    }

    #[test]
    fn test_validate_hmac_rejects_single_character_tamper() {
        let mut params = doc_params(DOC_HMAC);
        params.insert("timestamp", "1337178174");
        assert!(!validate_hmac(&params, &config_with("hush", None)));

        let mut params = doc_params(DOC_HMAC);
        params.insert("shop", "some-shoq.myshopify.com");
        assert!(!validate_hmac(&params, &config_with("hush", None)));
    }

    #[test]
    fn test_validate_hmac_rejects_added_parameter() {
        let mut params = doc_params(DOC_HMAC);
        params.insert("extra", "1");
        assert!(!validate_hmac(&params, &config_with("hush", None)));
    }

    #[test]
    fn test_validate_hmac_rejects_missing_signature() {
        let params = CallbackParams::from_pairs([("code", "c"), ("shop", "s")]);
        assert!(!validate_hmac(&params, &config_with("hush", None)));
    }

    #[test]
    fn test_validate_hmac_rejects_uppercase_digest() {
        let params = doc_params(&DOC_HMAC.to_uppercase());
        assert!(!validate_hmac(&params, &config_with("hush", None)));
    }

    #[test]
    fn test_validate_hmac_falls_back_to_old_secret() {
        assert!(validate_hmac(
            &doc_params(DOC_HMAC),
            &config_with("new-secret", Some("hush"))
        ));
    }

    #[test]
    fn test_validate_hmac_fails_when_both_keys_fail() {
        assert!(!validate_hmac(
            &doc_params(DOC_HMAC),
            &config_with("secret-1", Some("secret-2"))
        ));
    }

    #[test]
    fn test_validate_hmac_fails_without_configured_secret() {
        let config = ShopifyConfig::builder().build().unwrap();
        assert!(!validate_hmac(&doc_params(DOC_HMAC), &config));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("short", "longer string"));
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(hex::encode([0x00, 0xff, 0xab, 0xcd]), "00ffabcd");
        assert_eq!(hex::encode([]), "");
    }
}
