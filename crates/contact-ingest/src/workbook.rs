//! Spreadsheet preview reading via calamine.
//!
//! Only the first worksheet is read; sheet selection is not part of the
//! import flow.

use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto};
use contact_model::FilePreview;

use crate::PREVIEW_ROW_LIMIT;
use crate::error::{IngestError, Result};
use crate::file_name_of;
use crate::headers::{plan_headers, sample_row, warn_if_wide};

/// Read the first worksheet of an XLSX/XLS file into a preview.
pub fn read_workbook_preview(path: &Path) -> Result<FilePreview> {
    let metadata = std::fs::metadata(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut workbook = open_workbook_auto(path).map_err(|err| IngestError::ExcelParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|err| IngestError::ExcelParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    preview_from_rows(path, file_name_of(path), metadata.len(), &rows)
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        _ => cell.to_string().trim().to_string(),
    }
}

/// Assemble a preview from a stringified grid; the first row is the header.
///
/// Separate from the calamine plumbing so grid handling stays testable
/// without binary fixtures.
fn preview_from_rows(
    path: &Path,
    file_name: String,
    file_size_bytes: u64,
    rows: &[Vec<String>],
) -> Result<FilePreview> {
    let Some((header, data)) = rows.split_first() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };

    let kept = plan_headers(header);
    if kept.is_empty() {
        return Err(IngestError::NoColumns {
            path: path.to_path_buf(),
        });
    }
    warn_if_wide(path, kept.len());

    let mut sample_rows = Vec::new();
    let mut total_rows = 0usize;
    for row in data {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        total_rows += 1;
        if sample_rows.len() < PREVIEW_ROW_LIMIT {
            sample_rows.push(sample_row(&kept, row));
        }
    }
    if total_rows == 0 {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(FilePreview {
        file_name,
        file_size_bytes,
        columns: kept.into_iter().map(|(_, name)| name).collect(),
        sample_rows,
        total_rows,
    })
}
