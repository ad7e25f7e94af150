//! Required-field validation for column mappings.

use contact_model::{ColumnMapping, MappingValidity, SystemFieldDefinition};

/// Check that every required field in `fields` has a column assigned.
///
/// Total over its inputs: an incomplete mapping is reported, never an error.
/// Missing fields are listed by label in `fields` order. An assignment
/// holding an empty string counts as missing, since deserialized snapshots
/// can carry those.
pub fn validate_mapping(
    mapping: &ColumnMapping,
    fields: &[SystemFieldDefinition],
) -> MappingValidity {
    let mut missing = Vec::new();
    for field in fields {
        if !field.required {
            continue;
        }
        let satisfied = mapping
            .column_for(&field.key)
            .is_some_and(|column| !column.is_empty());
        if !satisfied {
            missing.push(field.label.clone());
        }
    }
    MappingValidity {
        is_valid: missing.is_empty(),
        missing_required_fields: missing,
    }
}
