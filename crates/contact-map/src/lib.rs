pub mod assign;
mod keywords;
pub mod score;
pub mod state;
pub mod validate;

pub use assign::auto_detect;
pub use score::{DEFAULT_MIN_CONFIDENCE, MatchQuality, score_match};
pub use state::{LoadOutcome, LoadToken, MappingState};
pub use validate::validate_mapping;
