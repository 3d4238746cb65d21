//! Shared state for request handlers.

use std::sync::Arc;

use crate::auth::Session;
use crate::config::{Settings, ShopifyConfig};
use crate::files::FileCatalogFetcher;

/// State cloned into every handler. All fields are read-only.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Upstream configuration.
    pub config: Arc<ShopifyConfig>,
    /// Catalog fetcher built from `config`.
    pub fetcher: Arc<FileCatalogFetcher>,
    /// Pre-provisioned credentials for `GET /api/files`.
    pub standalone: Option<Arc<Session>>,
}

impl AppState {
    /// Creates state for `config`, with optional standalone credentials.
    #[must_use]
    pub fn new(config: ShopifyConfig, standalone: Option<Session>) -> Self {
        Self {
            fetcher: Arc::new(FileCatalogFetcher::new(config.clone())),
            config: Arc::new(config),
            standalone: standalone.map(Arc::new),
        }
    }
}

impl From<Settings> for AppState {
    fn from(settings: Settings) -> Self {
        Self::new(settings.config, settings.standalone)
    }
}
