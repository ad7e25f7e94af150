//! Supported upload formats and the extension/MIME allow-list.

use std::fmt;
use std::path::Path;

/// File formats the ingestor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Detect the format from a file extension (ASCII case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(FileFormat::Csv)
        } else if extension.eq_ignore_ascii_case("xlsx") {
            Some(FileFormat::Xlsx)
        } else if extension.eq_ignore_ascii_case("xls") {
            Some(FileFormat::Xls)
        } else {
            None
        }
    }

    /// Detect the format from a declared MIME type.
    ///
    /// Browsers commonly declare CSV uploads as `application/vnd.ms-excel`;
    /// the declared type only gates the upload, parsing always dispatches
    /// on the extension.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "text/csv" => Some(FileFormat::Csv),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(FileFormat::Xlsx)
            }
            "application/vnd.ms-excel" => Some(FileFormat::Xls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Xls => "xls",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upload gate: accept when either the extension or the declared MIME type
/// is recognized.
pub fn validate_file_type(path: &Path, declared_mime: Option<&str>) -> bool {
    if FileFormat::from_path(path).is_some() {
        return true;
    }
    declared_mime.is_some_and(|mime| FileFormat::from_mime(mime).is_some())
}
