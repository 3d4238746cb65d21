//! CSV output of a file catalog.

use std::io::Write;
use std::path::Path;

use crate::export::ExportError;
use crate::files::FileRecord;

/// Writes `records` as CSV with a `filename,url` header row.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] if writing fails.
pub fn write_csv_to<W: Write>(output: W, records: &[FileRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(output);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Saves `records` to a CSV file at `path`.
///
/// Returns `Ok(false)` without creating a file when `records` is empty.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if the file cannot be created or written.
pub fn export_csv(path: &Path, records: &[FileRecord]) -> Result<bool, ExportError> {
    if records.is_empty() {
        tracing::info!("no files to save, skipping CSV export");
        return Ok(false);
    }

    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, records).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(count = records.len(), path = %path.display(), "saved file list");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_has_header_and_rows() {
        let records = vec![
            FileRecord::from_url("https://cdn/a.jpg"),
            FileRecord::from_url("https://cdn/b,c.pdf?v=1"),
        ];
        let mut output = Vec::new();
        write_csv_to(&mut output, &records).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "filename,url");
        assert_eq!(lines[1], "a.jpg,https://cdn/a.jpg");
        assert_eq!(lines[2], "\"b,c.pdf\",\"https://cdn/b,c.pdf?v=1\"");
    }

    #[test]
    fn test_export_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("files.csv");

        let written = export_csv(&path, &[FileRecord::from_url("https://cdn/a.jpg")]).unwrap();

        assert!(written);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("filename,url\n"));
    }

    #[test]
    fn test_export_csv_skips_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("files.csv");

        assert!(!export_csv(&path, &[]).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_export_csv_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("files.csv");

        assert!(matches!(
            export_csv(&path, &[FileRecord::from_url("https://cdn/a.jpg")]),
            Err(ExportError::Io { .. })
        ));
    }
}
