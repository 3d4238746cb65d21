//! The shop file catalog.
//!
//! Shopify exposes a shop's uploaded files through the paginated `files`
//! GraphQL connection. This module walks that connection to the end and
//! flattens it into [`FileRecord`]s:
//!
//! - [`FilePages`]: one page per call, following `endCursor`
//! - [`FileCatalogFetcher`]: folds every page into a [`FileCatalog`]
//!
//! Media images contribute `image.url`, generic files contribute `url`;
//! nodes of other types are skipped.

mod error;
mod fetcher;
mod page;
mod pager;
mod record;

pub use error::CatalogError;
pub use fetcher::FileCatalogFetcher;
pub use page::{FILES_QUERY, PAGE_SIZE};
pub use pager::FilePages;
pub use record::{filename_from_url, FileCatalog, FileRecord};
