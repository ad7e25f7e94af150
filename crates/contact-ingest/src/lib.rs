//! Turns uploaded contact files (CSV, XLSX, XLS) into [`FilePreview`]s.

pub mod delimited;
pub mod error;
pub mod format;
mod headers;
pub mod workbook;

pub use delimited::read_csv_preview;
pub use error::{IngestError, Result};
pub use format::{FileFormat, validate_file_type};
pub use workbook::read_workbook_preview;

use std::path::Path;

use contact_model::FilePreview;

/// Number of data rows included in a preview's sample.
pub const PREVIEW_ROW_LIMIT: usize = 5;

/// Parse an uploaded file into a preview, dispatching on its extension.
///
/// The extension is checked before any I/O, so an unsupported path fails
/// fast with [`IngestError::UnsupportedFormat`].
pub fn ingest(path: &Path) -> Result<FilePreview> {
    match FileFormat::from_path(path) {
        Some(FileFormat::Csv) => delimited::read_csv_preview(path),
        Some(FileFormat::Xlsx | FileFormat::Xls) => workbook::read_workbook_preview(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn ingest_rejects_unknown_extension_without_io() {
        // The path does not exist; dispatch must fail on the extension
        // before touching the file system.
        let result = ingest(Path::new("/nope/contacts.txt"));
        assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));

        let result = ingest(Path::new("/nope/contacts"));
        assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
    }

    #[test]
    fn ingest_dispatches_csv() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "Email\na@x.com\n").unwrap();

        let preview = ingest(file.path()).unwrap();
        assert_eq!(preview.columns, vec!["Email"]);
        assert_eq!(preview.total_rows, 1);
    }

    #[test]
    fn file_name_keeps_only_the_final_component() {
        assert_eq!(file_name_of(Path::new("/a/b/contacts.csv")), "contacts.csv");
    }
}
