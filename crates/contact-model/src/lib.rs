pub mod fields;
pub mod mapping;
pub mod preview;
pub mod score;

pub use fields::{SystemFieldDefinition, system_fields};
pub use mapping::{ColumnMapping, MappingSnapshot, MappingValidity};
pub use preview::FilePreview;
pub use score::{MatchMethod, MatchScore};
