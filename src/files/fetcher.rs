//! Whole-catalog fetching.

use crate::auth::Session;
use crate::clients::{GraphqlClient, GraphqlError};
use crate::config::{AccessToken, ShopDomain, ShopifyConfig};
use crate::files::{CatalogError, FileCatalog, FilePages};

/// Fetches complete file catalogs.
///
/// Each call owns its own pager and accumulator, so one fetcher can serve
/// concurrent requests.
///
/// ```rust,ignore
/// use shopify_file_catalog::files::FileCatalogFetcher;
///
/// let fetcher = FileCatalogFetcher::new(config);
/// let catalog = fetcher.fetch_all(&session).await?;
/// println!("{} files", catalog.total);
/// ```
#[derive(Clone, Debug)]
pub struct FileCatalogFetcher {
    config: ShopifyConfig,
}

// Verify FileCatalogFetcher is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FileCatalogFetcher>();
};

impl FileCatalogFetcher {
    /// Creates a fetcher using `config` for the API version, timeout and
    /// upstream origin.
    #[must_use]
    pub const fn new(config: ShopifyConfig) -> Self {
        Self { config }
    }

    /// Fetches every file of the session's shop.
    ///
    /// Pages are requested strictly one after another. Records keep
    /// Shopify's order. If any page fails, nothing is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::GraphQl`] or [`CatalogError::FetchFailed`]
    /// from the first page that fails.
    pub async fn fetch_all(&self, session: &Session) -> Result<FileCatalog, CatalogError> {
        let client = GraphqlClient::new(session, &self.config)?;
        let mut pages = FilePages::new(client);
        let mut files = Vec::new();

        while let Some(page) = pages.next_page().await.map_err(|e| {
            let timed_out = matches!(
                &e,
                CatalogError::FetchFailed(GraphqlError::Http(http)) if http.is_timeout()
            );
            tracing::error!(
                shop = %session.shop,
                error = %e,
                timed_out,
                "file catalog fetch failed"
            );
            e
        })? {
            files.extend(page);
            tracing::debug!(
                shop = %session.shop,
                page = pages.pages_fetched(),
                total = files.len(),
                "merged files page"
            );
        }

        tracing::info!(
            shop = %session.shop,
            pages = pages.pages_fetched(),
            total = files.len(),
            "fetched file catalog"
        );

        Ok(FileCatalog::from(files))
    }

    /// Fetches the catalog for a shop and token taken straight from a
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] if either value is absent
    /// or blank, otherwise as [`fetch_all`](Self::fetch_all).
    pub async fn fetch_for(
        &self,
        shop: Option<&str>,
        token: Option<&str>,
    ) -> Result<FileCatalog, CatalogError> {
        let missing = || CatalogError::InvalidRequest {
            reason: "Missing shop or token".to_string(),
        };
        let shop = shop
            .and_then(|s| ShopDomain::new(s).ok())
            .ok_or_else(missing)?;
        let token = token
            .and_then(|t| AccessToken::new(t).ok())
            .ok_or_else(missing)?;

        self.fetch_all(&Session::new(shop, token)).await
    }
}
