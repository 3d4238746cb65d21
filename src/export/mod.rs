//! Offline exports of a file catalog.
//!
//! - [`export_csv`]: save the `filename,url` list as CSV
//! - [`download_all`]: fetch every file into a local folder

mod csv_export;
mod download;
mod error;

pub use csv_export::{export_csv, write_csv_to};
pub use download::{download_all, sanitize_filename, DownloadReport, FALLBACK_FILENAME};
pub use error::ExportError;
