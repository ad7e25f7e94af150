//! Greedy one-to-one assignment of upload columns to system fields.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use contact_model::{ColumnMapping, MatchScore, SystemFieldDefinition};

use crate::score::score_match;

/// Propose a mapping for the given columns.
///
/// Every `(field, column)` pair is scored; pairs whose confidence sits below
/// `min_confidence` are discarded, and the rest are walked best score first
/// with each field and each column used at most once. The result is total
/// over `fields`, with unmatched fields left at `None`.
///
/// Greedy first-fit, not a maximum-weight matching: a strong pair is never
/// given up to free a column for a weaker field.
pub fn auto_detect(
    columns: &[String],
    fields: &[SystemFieldDefinition],
    min_confidence: f64,
) -> ColumnMapping {
    let mut candidates: Vec<MatchScore> = Vec::new();
    for field in fields {
        for column in columns {
            let candidate = score_match(column, field);
            if candidate.confidence >= min_confidence {
                candidates.push(candidate);
            }
        }
    }

    // Stable sort keeps the field-then-column enumeration order on equal
    // scores, so ties resolve the same way on every run.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut mapping = ColumnMapping::unassigned(fields);
    let mut claimed: BTreeSet<&str> = BTreeSet::new();
    for candidate in &candidates {
        if mapping.column_for(&candidate.field_key).is_some()
            || claimed.contains(candidate.column.as_str())
        {
            continue;
        }
        claimed.insert(candidate.column.as_str());
        mapping.assign(&candidate.field_key, Some(candidate.column.clone()));
    }

    tracing::debug!(
        columns = columns.len(),
        fields = fields.len(),
        assigned = mapping.assigned_count(),
        "auto-detected column mapping"
    );
    mapping
}
