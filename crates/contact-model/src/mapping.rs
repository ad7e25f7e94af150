use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::SystemFieldDefinition;
use crate::preview::FilePreview;

/// Assignment of file columns to system field keys.
///
/// The map is total over the field set it was built for: every field key is
/// present, unmapped fields hold `None`. No two fields may hold the same
/// column; `assign` keeps that invariant by displacing the previous holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: BTreeMap<String, Option<String>>,
}

impl ColumnMapping {
    /// A mapping over `fields` with every entry unassigned.
    pub fn unassigned(fields: &[SystemFieldDefinition]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|field| (field.key.clone(), None))
                .collect(),
        }
    }

    /// The column assigned to `key`, if any.
    pub fn column_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|column| column.as_deref())
    }

    /// The field currently holding `column`, if any.
    pub fn field_for(&self, column: &str) -> Option<&str> {
        self.entries.iter().find_map(|(key, assigned)| {
            (assigned.as_deref() == Some(column)).then_some(key.as_str())
        })
    }

    pub fn contains_field(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_column_assigned(&self, column: &str) -> bool {
        self.field_for(column).is_some()
    }

    /// Assign `column` to `key`, displacing any other field that held the
    /// same column. Returns false when `key` is not part of this mapping.
    pub fn assign(&mut self, key: &str, column: Option<String>) -> bool {
        if !self.entries.contains_key(key) {
            return false;
        }
        if let Some(new_column) = column.as_deref() {
            let displaced: Vec<String> = self
                .entries
                .iter()
                .filter(|(other, assigned)| {
                    other.as_str() != key && assigned.as_deref() == Some(new_column)
                })
                .map(|(other, _)| other.clone())
                .collect();
            for other in displaced {
                self.entries.insert(other, None);
            }
        }
        self.entries.insert(key.to_string(), column);
        true
    }

    /// Number of fields with a column assigned.
    pub fn assigned_count(&self) -> usize {
        self.entries.values().filter(|column| column.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as `(field_key, column)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, column)| (key.as_str(), column.as_deref()))
    }

    /// Columns currently assigned to some field, in field-key order.
    pub fn assigned_columns(&self) -> impl Iterator<Item = &str> {
        self.entries.values().filter_map(|column| column.as_deref())
    }
}

/// Result of checking a mapping against the required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingValidity {
    pub is_valid: bool,
    /// Labels of required fields with no column, in field order.
    pub missing_required_fields: Vec<String>,
}

impl MappingValidity {
    /// Validity before any file is loaded: not valid, but nothing to report
    /// against yet.
    pub fn baseline() -> Self {
        Self::default()
    }
}

/// Serializable view of a mapping session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSnapshot {
    pub file_preview: Option<FilePreview>,
    pub column_mapping: ColumnMapping,
    pub is_valid: bool,
    pub missing_required_fields: Vec<String>,
}
