//! Errors from exporting a catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a catalog to disk.
///
/// Individual download failures are not errors; they are counted in
/// [`DownloadReport`](crate::export::DownloadReport).
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV output could not be written.
    #[error("Failed to write CSV to {path}: {source}")]
    Csv {
        /// Destination file.
        path: PathBuf,
        /// Underlying writer error.
        source: csv::Error,
    },

    /// A filesystem operation on the export target failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The download client could not be created.
    #[error("Failed to create download client: {0}")]
    Client(#[from] reqwest::Error),
}
