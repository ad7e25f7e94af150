//! CSV preview reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use contact_model::FilePreview;
use csv::ReaderBuilder;

use crate::PREVIEW_ROW_LIMIT;
use crate::error::{IngestError, Result};
use crate::file_name_of;
use crate::headers::{plan_headers, sample_row, warn_if_wide};

/// Reject UTF-16 files up front.
///
/// The csv crate would otherwise surface a UTF-8 error from deep inside
/// record iteration; failing here names the real cause.
fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    if bytes_read >= 2 && (buffer == [0xFF, 0xFE] || buffer == [0xFE, 0xFF]) {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "UTF-16 encoding is not supported; re-save the file as UTF-8".to_string(),
        });
    }
    Ok(())
}

fn map_csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Read a CSV file into a preview: cleaned headers, the first few sample
/// rows, and the full data-row count.
///
/// The whole file is scanned so `total_rows` is the true count, but only
/// [`PREVIEW_ROW_LIMIT`] rows are materialized.
pub fn read_csv_preview(path: &Path) -> Result<FilePreview> {
    let metadata = std::fs::metadata(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    validate_encoding(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| map_csv_error(path, err))?;

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|err| map_csv_error(path, err))?
        .iter()
        .map(str::to_string)
        .collect();
    let kept = plan_headers(&raw_headers);
    if kept.is_empty() {
        return Err(IngestError::NoColumns {
            path: path.to_path_buf(),
        });
    }
    warn_if_wide(path, kept.len());

    let mut sample_rows = Vec::new();
    let mut total_rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|err| map_csv_error(path, err))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        total_rows += 1;
        if sample_rows.len() < PREVIEW_ROW_LIMIT {
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            sample_rows.push(sample_row(&kept, &cells));
        }
    }
    if total_rows == 0 {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(FilePreview {
        file_name: file_name_of(path),
        file_size_bytes: metadata.len(),
        columns: kept.into_iter().map(|(_, name)| name).collect(),
        sample_rows,
        total_rows,
    })
}
