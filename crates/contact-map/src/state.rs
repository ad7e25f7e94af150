//! Mapping session state: file lifecycle, user overrides, validity.
//!
//! One session owns at most one loaded file. Load results pass a token check
//! before they are applied, so when the user picks a second file while the
//! first is still parsing, whichever load was started last always wins.

use std::collections::BTreeMap;
use std::path::Path;

use contact_ingest::IngestError;
use contact_model::{
    ColumnMapping, FilePreview, MappingSnapshot, MappingValidity, SystemFieldDefinition,
    system_fields,
};

use crate::assign::auto_detect;
use crate::score::DEFAULT_MIN_CONFIDENCE;
use crate::validate::validate_mapping;

/// Identifies one load attempt. Only the newest outstanding token may apply
/// its result; see [`MappingState::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// What [`MappingState::finish_load`] did with a load result.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Preview installed, mapping auto-detected, validity recomputed.
    Applied,
    /// Ingestion failed; the session was reset to the empty baseline.
    Failed(IngestError),
    /// A newer load superseded this token; the result was discarded.
    Stale,
}

/// State for one contact-import mapping session.
///
/// All methods are synchronous. Callers that parse files off-thread start
/// with [`MappingState::begin_load`], run [`contact_ingest::ingest`] wherever
/// they like, and feed the result back through [`MappingState::finish_load`];
/// [`MappingState::load_file`] does the whole cycle inline.
#[derive(Debug, Clone)]
pub struct MappingState {
    fields: Vec<SystemFieldDefinition>,
    min_confidence: f64,
    preview: Option<FilePreview>,
    mapping: ColumnMapping,
    validity: MappingValidity,
    load_seq: u64,
}

impl MappingState {
    /// A session over the built-in system fields.
    pub fn new() -> Self {
        Self::with_fields(system_fields())
    }

    /// A session over a custom field set.
    pub fn with_fields(fields: Vec<SystemFieldDefinition>) -> Self {
        let mapping = ColumnMapping::unassigned(&fields);
        Self {
            fields,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            preview: None,
            mapping,
            validity: MappingValidity::baseline(),
            load_seq: 0,
        }
    }

    /// Override the auto-detection confidence floor.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    // === File lifecycle ===

    /// Parse `path`, auto-map its columns, and validate, all inline.
    ///
    /// On failure the session is left at the empty baseline and the error is
    /// returned for display.
    pub fn load_file(&mut self, path: &Path) -> Result<(), IngestError> {
        self.load_seq += 1;
        match contact_ingest::ingest(path) {
            Ok(preview) => {
                self.install_preview(preview);
                Ok(())
            }
            Err(err) => {
                self.clear_to_baseline();
                Err(err)
            }
        }
    }

    /// Start a load whose parsing happens elsewhere. Supersedes any load
    /// still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.load_seq += 1;
        LoadToken(self.load_seq)
    }

    /// Apply the result of a load started with [`MappingState::begin_load`].
    ///
    /// A result arriving under a superseded token leaves the session
    /// untouched, so completion order never decides which file is shown.
    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<FilePreview, IngestError>,
    ) -> LoadOutcome {
        if token.0 != self.load_seq {
            tracing::debug!(
                token = token.0,
                current = self.load_seq,
                "dropping stale load result"
            );
            return LoadOutcome::Stale;
        }
        match result {
            Ok(preview) => {
                self.install_preview(preview);
                LoadOutcome::Applied
            }
            Err(err) => {
                self.clear_to_baseline();
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Drop the loaded file and return to the empty baseline. Any load still
    /// in flight is superseded.
    pub fn reset(&mut self) {
        self.load_seq += 1;
        self.clear_to_baseline();
    }

    // === User overrides ===

    /// Merge a batch of mapping overrides, then revalidate.
    ///
    /// `None` clears a field. Unknown field keys, and columns that are not
    /// part of the loaded preview, are logged and ignored. Assigning a column
    /// displaces whichever field held it before.
    pub fn set_mapping(&mut self, updates: &BTreeMap<String, Option<String>>) -> &MappingValidity {
        for (key, column) in updates {
            self.apply_override(key, column.as_deref());
        }
        self.revalidate()
    }

    /// Assign or clear a single field, then revalidate.
    pub fn set_field(&mut self, key: &str, column: Option<&str>) -> &MappingValidity {
        self.apply_override(key, column);
        self.revalidate()
    }

    // === Accessors ===

    pub fn fields(&self) -> &[SystemFieldDefinition] {
        &self.fields
    }

    pub fn preview(&self) -> Option<&FilePreview> {
        self.preview.as_ref()
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn validity(&self) -> &MappingValidity {
        &self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid
    }

    pub fn missing_required_fields(&self) -> &[String] {
        &self.validity.missing_required_fields
    }

    /// Preview columns not assigned to any field, in file order. Empty while
    /// no file is loaded.
    pub fn available_columns(&self) -> Vec<&str> {
        let Some(preview) = &self.preview else {
            return Vec::new();
        };
        preview
            .columns
            .iter()
            .map(String::as_str)
            .filter(|column| !self.mapping.is_column_assigned(column))
            .collect()
    }

    /// Serializable view of the session for the presentation layer.
    pub fn snapshot(&self) -> MappingSnapshot {
        MappingSnapshot {
            file_preview: self.preview.clone(),
            column_mapping: self.mapping.clone(),
            is_valid: self.validity.is_valid,
            missing_required_fields: self.validity.missing_required_fields.clone(),
        }
    }

    // === Internals ===

    fn install_preview(&mut self, preview: FilePreview) {
        self.mapping = auto_detect(&preview.columns, &self.fields, self.min_confidence);
        tracing::debug!(
            file = %preview.file_name,
            columns = preview.columns.len(),
            rows = preview.total_rows,
            auto_mapped = self.mapping.assigned_count(),
            "installed file preview"
        );
        self.preview = Some(preview);
        self.revalidate();
    }

    fn clear_to_baseline(&mut self) {
        self.preview = None;
        self.mapping = ColumnMapping::unassigned(&self.fields);
        self.validity = MappingValidity::baseline();
    }

    fn revalidate(&mut self) -> &MappingValidity {
        self.validity = if self.preview.is_some() {
            validate_mapping(&self.mapping, &self.fields)
        } else {
            MappingValidity::baseline()
        };
        &self.validity
    }

    fn apply_override(&mut self, key: &str, column: Option<&str>) {
        if !self.mapping.contains_field(key) {
            tracing::warn!(key, "ignoring override for unknown field");
            return;
        }
        if let Some(column) = column {
            let known = self
                .preview
                .as_ref()
                .is_some_and(|preview| preview.has_column(column));
            if !known {
                tracing::warn!(key, column, "ignoring override for unknown column");
                return;
            }
        }
        self.mapping.assign(key, column.map(str::to_string));
    }
}

impl Default for MappingState {
    fn default() -> Self {
        Self::new()
    }
}
