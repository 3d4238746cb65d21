//! OAuth callback query parameters.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Name of the signature parameter Shopify appends to the callback.
pub const HMAC_PARAM: &str = "hmac";

/// The complete set of query parameters on an OAuth callback request.
///
/// Shopify signs every parameter it sends, and the set varies (`host`,
/// `state`, `timestamp`, ...), so all of them are kept rather than a fixed
/// struct. Keys are held in sorted order, which is the order the signature
/// is computed over.
///
/// ```rust
/// use shopify_file_catalog::auth::oauth::CallbackParams;
///
/// let params = CallbackParams::from_pairs([
///     ("shop", "some-shop.myshopify.com"),
///     ("code", "abc"),
///     ("hmac", "ffff"),
/// ]);
///
/// assert_eq!(params.to_signable_string(), "code=abc&shop=some-shop.myshopify.com");
/// assert_eq!(params.hmac(), Some("ffff"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CallbackParams(BTreeMap<String, String>);

impl CallbackParams {
    /// Builds the parameter set from key/value pairs. A repeated key keeps
    /// its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the supplied signature.
    #[must_use]
    pub fn hmac(&self) -> Option<&str> {
        self.get(HMAC_PARAM)
    }

    /// Returns the shop parameter, if present and non-blank.
    #[must_use]
    pub fn shop(&self) -> Option<&str> {
        self.get("shop").filter(|s| !s.trim().is_empty())
    }

    /// Returns the authorization code, if present and non-blank.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.get("code").filter(|s| !s.trim().is_empty())
    }

    /// Builds the string the signature covers: every parameter except
    /// `hmac`, sorted by key, rendered `key=value` and joined with `&`.
    ///
    /// Values are used exactly as received (already percent-decoded).
    #[must_use]
    pub fn to_signable_string(&self) -> String {
        self.0
            .iter()
            .filter(|(k, _)| k.as_str() != HMAC_PARAM)
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
