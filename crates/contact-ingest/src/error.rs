//! Error types for contact file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an uploaded file into a preview.
///
/// All of these are recoverable: the session drops back to its empty
/// baseline and the user picks another file. Nothing here retries.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// File extension is not one of the supported upload formats.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === File System Errors ===
    /// Failed to read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parse Errors ===
    /// CSV could not be parsed.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Workbook could not be parsed.
    #[error("failed to parse workbook {path}: {message}")]
    ExcelParse { path: PathBuf, message: String },

    // === Content Errors ===
    /// No usable column headers after trimming and de-duplication.
    #[error("no usable columns in {path}")]
    NoColumns { path: PathBuf },

    /// Workbook contains no worksheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// File parsed but holds no data rows.
    #[error("file has no data rows: {path}")]
    EmptyFile { path: PathBuf },
}

impl IngestError {
    /// Stable machine-readable code for the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::UnsupportedFormat { .. } => "unsupported_format",
            IngestError::FileRead { .. } => "file_read",
            IngestError::CsvParse { .. } => "csv_parse",
            IngestError::ExcelParse { .. } => "excel_parse",
            IngestError::NoColumns { .. } => "no_columns",
            IngestError::NoSheets { .. } => "no_sheets",
            IngestError::EmptyFile { .. } => "empty_file",
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NoColumns {
            path: PathBuf::from("/tmp/contacts.csv"),
        };
        assert_eq!(err.to_string(), "no usable columns in /tmp/contacts.csv");

        let err = IngestError::CsvParse {
            path: PathBuf::from("broken.csv"),
            message: "bad quoting".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse CSV broken.csv: bad quoting");
    }

    #[test]
    fn test_file_read_keeps_source() {
        let err = IngestError::FileRead {
            path: PathBuf::from("gone.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_codes_are_stable() {
        let path = PathBuf::from("x.csv");
        let cases = [
            (
                IngestError::UnsupportedFormat { path: path.clone() },
                "unsupported_format",
            ),
            (
                IngestError::FileRead {
                    path: path.clone(),
                    source: std::io::Error::other("io"),
                },
                "file_read",
            ),
            (
                IngestError::CsvParse {
                    path: path.clone(),
                    message: String::new(),
                },
                "csv_parse",
            ),
            (
                IngestError::ExcelParse {
                    path: path.clone(),
                    message: String::new(),
                },
                "excel_parse",
            ),
            (IngestError::NoColumns { path: path.clone() }, "no_columns"),
            (IngestError::NoSheets { path: path.clone() }, "no_sheets"),
            (IngestError::EmptyFile { path }, "empty_file"),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }
}
