//! Header planning and row shaping shared by the preview readers.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Column counts above this trigger a performance warning.
const WIDE_COLUMN_WARNING: usize = 500;

/// Clean a header cell: strip BOM, trim, collapse inner whitespace.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim a data cell, dropping any stray BOM.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Plan which header cells survive: blanks are dropped, duplicates keep
/// their first occurrence. Returns `(source index, cleaned name)` pairs so
/// data rows can be zipped by position.
pub(crate) fn plan_headers(raw: &[String]) -> Vec<(usize, String)> {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::new();
    for (index, cell) in raw.iter().enumerate() {
        let name = normalize_header(cell);
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            tracing::warn!(column = %name, "dropping duplicate header column");
            continue;
        }
        kept.push((index, name));
    }
    kept
}

/// Zip one data row against the surviving headers. Cells missing from the
/// row become empty strings.
pub(crate) fn sample_row(kept: &[(usize, String)], cells: &[String]) -> BTreeMap<String, String> {
    kept.iter()
        .map(|(index, name)| {
            let value = cells.get(*index).map(String::as_str).unwrap_or("");
            (name.clone(), normalize_cell(value))
        })
        .collect()
}

pub(crate) fn warn_if_wide(path: &Path, column_count: usize) {
    if column_count > WIDE_COLUMN_WARNING {
        tracing::warn!(
            path = %path.display(),
            columns = column_count,
            "file has more than 500 columns - may impact matching performance"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cells: &[&str]) -> Vec<String> {
        cells.iter().copied().map(str::to_string).collect()
    }

    #[test]
    fn normalizes_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}Email"), "Email");
        assert_eq!(normalize_header("  Full   Name  "), "Full Name");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn plan_drops_blanks_and_keeps_first_duplicate() {
        let kept = plan_headers(&headers(&["Email", "", "Name", "Email", "  "]));
        assert_eq!(
            kept,
            vec![(0, "Email".to_string()), (2, "Name".to_string())]
        );
    }

    #[test]
    fn sample_row_pads_missing_cells() {
        let kept = plan_headers(&headers(&["Email", "", "Name"]));
        let row = sample_row(&kept, &headers(&["a@x.com"]));
        assert_eq!(row["Email"], "a@x.com");
        assert_eq!(row["Name"], "");
    }

    #[test]
    fn sample_row_uses_source_indices() {
        // "Name" survives at source index 2, so its value must come from
        // the third cell even though only two headers survive.
        let kept = plan_headers(&headers(&["Email", "", "Name"]));
        let row = sample_row(&kept, &headers(&["a@x.com", "skipped", "Ada"]));
        assert_eq!(row["Name"], "Ada");
    }
}
