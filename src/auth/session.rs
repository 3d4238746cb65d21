//! Authenticated shop sessions.
//!
//! A [`Session`] pairs a shop with the access token that authorizes Admin
//! API calls against it. It is produced by the OAuth callback exchange or
//! built directly from pre-provisioned credentials.

use serde::Deserialize;

use crate::auth::AuthScopes;
use crate::config::{AccessToken, ShopDomain};

/// Represents an authenticated session for Shopify API calls.
///
/// Sessions are not persisted and carry no expiry; the caller owns the
/// token once it has been handed out.
///
/// ```rust
/// use shopify_file_catalog::{AccessToken, Session, ShopDomain};
///
/// let session = Session::new(
///     ShopDomain::new("my-store.myshopify.com").unwrap(),
///     AccessToken::new("shpat_abc").unwrap(),
/// );
/// assert!(session.scopes.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token for API authentication.
    pub access_token: AccessToken,

    /// The scopes granted with the token, when known.
    pub scopes: AuthScopes,
}

impl Session {
    /// Creates a session with no recorded scopes.
    #[must_use]
    pub fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self {
            shop,
            access_token,
            scopes: AuthScopes::new(),
        }
    }

    /// Creates a session from a token endpoint response.
    pub(crate) fn from_access_token_response(
        shop: ShopDomain,
        access_token: AccessToken,
        response: &AccessTokenResponse,
    ) -> Self {
        Self {
            shop,
            access_token,
            scopes: response
                .scope
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

/// Body returned by `/admin/oauth/access_token`.
#[derive(Debug, Deserialize)]
pub(crate) struct AccessTokenResponse {
    pub access_token: Option<String>,
    pub scope: Option<String>,
}
