//! Downloading every file of a catalog into a folder.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::export::ExportError;
use crate::files::FileRecord;

/// Name used when a URL has no usable basename.
pub const FALLBACK_FILENAME: &str = "unknown_file";

/// Outcome of [`download_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Files fetched and written.
    pub downloaded: usize,
    /// Files skipped because the target already existed.
    pub skipped: usize,
    /// Files whose download or write failed.
    pub failed: usize,
}

/// Derives a safe local file name from a file URL.
///
/// Takes the last path segment of the URL (query and fragment excluded),
/// percent-decodes it and replaces each of `<>:"/\|?*` with `_`.
///
/// ```rust
/// use shopify_file_catalog::export::sanitize_filename;
///
/// assert_eq!(sanitize_filename("https://cdn.example.com/a/b%3Ac.png?v=1"), "b_c.png");
/// assert_eq!(sanitize_filename("https://cdn.example.com/a/what*.txt"), "what_.txt");
/// assert_eq!(sanitize_filename("https://cdn.example.com/"), "unknown_file");
/// ```
#[must_use]
pub fn sanitize_filename(url: &str) -> String {
    let basename = reqwest::Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed.path_segments().and_then(Iterator::last).map(|segment| {
                urlencoding::decode(segment)
                    .map_or_else(|_| segment.to_string(), std::borrow::Cow::into_owned)
            })
        })
        .unwrap_or_default();

    let sanitized: String = basename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect();

    if sanitized.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        sanitized
    }
}

/// Downloads each record's URL into `dir`, one at a time.
///
/// The folder is created if needed. Existing files are left alone and
/// counted as skipped. A failed download is logged and counted; it does
/// not stop the run.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if `dir` cannot be created and
/// [`ExportError::Client`] if the HTTP client cannot be built.
pub async fn download_all(
    dir: &Path,
    records: &[FileRecord],
    timeout: Duration,
) -> Result<DownloadReport, ExportError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(timeout)
        .build()?;

    let total = records.len();
    let mut report = DownloadReport::default();

    for (index, record) in records.iter().enumerate() {
        let filename = sanitize_filename(&record.url);
        let target = dir.join(&filename);
        let position = index + 1;

        if tokio::fs::metadata(&target).await.is_ok() {
            tracing::warn!(position, total, file = %filename, "skipping existing file");
            report.skipped += 1;
            continue;
        }

        tracing::info!(position, total, file = %filename, "downloading");
        match fetch_to(&client, &record.url, &target).await {
            Ok(()) => report.downloaded += 1,
            Err(e) => {
                tracing::error!(file = %filename, error = %e, "download failed");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        downloaded = report.downloaded,
        skipped = report.skipped,
        failed = report.failed,
        dir = %dir.display(),
        "download finished"
    );

    Ok(report)
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

async fn fetch_to(client: &reqwest::Client, url: &str, target: &Path) -> Result<(), FetchError> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    tokio::fs::write(target, &bytes)
        .await
        .map_err(|source| FetchError::Write {
            path: target.to_path_buf(),
            source,
        })
}
