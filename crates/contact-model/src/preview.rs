use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed summary of an uploaded contact file.
///
/// Built once by the ingestion layer and treated as immutable afterwards;
/// re-uploading a file replaces the whole preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePreview {
    /// File name as uploaded (no directory components).
    pub file_name: String,
    /// Size on disk in bytes.
    pub file_size_bytes: u64,
    /// Header names after trimming, BOM stripping, and duplicate removal.
    /// Always non-empty strings, unique within the file.
    pub columns: Vec<String>,
    /// The first few data rows, keyed by column name. Missing cells are
    /// empty strings.
    pub sample_rows: Vec<BTreeMap<String, String>>,
    /// Full data-row count for the file, not just the sampled slice.
    pub total_rows: usize,
}

impl FilePreview {
    /// Whether `name` is one of the surviving columns (exact match).
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }
}
