//! Normalized file records.

use serde::{Deserialize, Serialize};

/// One file in a shop's catalog.
///
/// ```rust
/// use shopify_file_catalog::files::FileRecord;
///
/// let record = FileRecord::from_url("https://cdn.shopify.com/s/files/1/report.pdf?v=3");
/// assert_eq!(record.filename, "report.pdf");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// The last path segment of `url`, without any query string.
    pub filename: String,
    /// The file's public URL, exactly as returned by Shopify.
    pub url: String,
}

impl FileRecord {
    /// Builds a record, deriving the filename from the URL.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            filename: filename_from_url(&url).to_string(),
            url,
        }
    }
}

/// Returns the text after the last `/` of `url`, cut at the first `?`.
///
/// ```rust
/// use shopify_file_catalog::files::filename_from_url;
///
/// assert_eq!(filename_from_url("https://cdn.example.com/a/b/photo.jpg"), "photo.jpg");
/// assert_eq!(filename_from_url("https://cdn.example.com/report.pdf?v=3"), "report.pdf");
/// assert_eq!(filename_from_url("https://cdn.example.com/dir/"), "");
/// ```
#[must_use]
pub fn filename_from_url(url: &str) -> &str {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    last_segment.split('?').next().unwrap_or(last_segment)
}

/// The collected catalog for one shop.
///
/// `total` always equals `files.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCatalog {
    /// Every file, in the order Shopify returned them.
    pub files: Vec<FileRecord>,
    /// Number of entries in `files`.
    pub total: usize,
}

impl From<Vec<FileRecord>> for FileCatalog {
    fn from(files: Vec<FileRecord>) -> Self {
        Self {
            total: files.len(),
            files,
        }
    }
}
