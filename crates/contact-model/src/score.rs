use std::fmt;

use serde::{Deserialize, Serialize};

/// How a column-to-field score was produced.
///
/// Informational: the assigner ranks by score and gates on confidence, the
/// method only explains which heuristic dominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Normalized column equals the field key.
    ExactMatch,
    /// Normalized column equals the field label.
    LabelMatch,
    /// The weighted keyword vocabulary dominated.
    KeywordMatch,
    /// Edit-distance similarity dominated.
    FuzzyMatch,
    /// Token overlap dominated.
    WordOverlap,
    /// No single heuristic dominated; composite only.
    SemanticMatch,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::ExactMatch => "exact_match",
            MatchMethod::LabelMatch => "label_match",
            MatchMethod::KeywordMatch => "keyword_match",
            MatchMethod::FuzzyMatch => "fuzzy_match",
            MatchMethod::WordOverlap => "word_overlap",
            MatchMethod::SemanticMatch => "semantic_match",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score for one column-field pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Source column name as it appears in the file.
    pub column: String,
    /// Target system field key.
    pub field_key: String,
    /// Composite strength on a 0-100 scale; used for ranking.
    pub score: f64,
    /// Certainty on a 0-1 scale; used for threshold gating.
    pub confidence: f64,
    pub method: MatchMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_snake_case() {
        let json = serde_json::to_string(&MatchMethod::WordOverlap).expect("serialize method");
        assert_eq!(json, "\"word_overlap\"");
        assert_eq!(MatchMethod::ExactMatch.to_string(), "exact_match");
    }

    #[test]
    fn score_round_trips() {
        let score = MatchScore {
            column: "E-Mail".to_string(),
            field_key: "email".to_string(),
            score: 42.5,
            confidence: 0.85,
            method: MatchMethod::FuzzyMatch,
        };
        let json = serde_json::to_string(&score).expect("serialize score");
        let round: MatchScore = serde_json::from_str(&json).expect("deserialize score");
        assert_eq!(round, score);
    }
}
