//! Layered scoring of an upload column against a system field.
//!
//! Matching runs in order of strictness: exact key match, field label match,
//! then a weighted composite of keyword, edit-distance, and token-overlap
//! signals. All comparisons are case-insensitive and the result depends only
//! on the two inputs, so repeat runs over the same header are identical.

use std::collections::BTreeSet;

use contact_model::{MatchMethod, MatchScore, SystemFieldDefinition};
use rapidfuzz::distance::levenshtein;
use serde::{Deserialize, Serialize};

use crate::keywords::keywords_for;

// === Composite weights ===

const KEYWORD_WEIGHT: f64 = 0.6;
const SIMILARITY_WEIGHT: f64 = 0.25;
const OVERLAP_WEIGHT: f64 = 0.15;

// === Method gates ===

// Checked in this order when no exact or label match fires; the winning
// signal is reported as the method and becomes the confidence.
const KEYWORD_METHOD_GATE: f64 = 0.7;
const FUZZY_METHOD_GATE: f64 = 0.8;
const OVERLAP_METHOD_GATE: f64 = 0.6;

// === Keyword containment grades ===

const REVERSE_CONTAINMENT_FACTOR: f64 = 0.9;
const WORD_MATCH_FACTOR: f64 = 0.85;
const EDIT_MATCH_FACTOR: f64 = 0.75;
const KEYWORD_EDIT_GATE: f64 = 0.7;

/// Confidence floor below which the assigner leaves a pair unproposed.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Score one column header against one field.
///
/// Returns a total mapping of the inputs to a `[0, 100]` score and a
/// `[0, 1]` confidence; an uninformative header simply scores near zero.
pub fn score_match(column: &str, field: &SystemFieldDefinition) -> MatchScore {
    let column_norm = normalize(column);
    let key_norm = normalize(&field.key);
    let label_norm = normalize(&field.label);

    if column_norm == key_norm {
        return MatchScore {
            column: column.to_string(),
            field_key: field.key.clone(),
            score: 100.0,
            confidence: 1.0,
            method: MatchMethod::ExactMatch,
        };
    }
    if column_norm == label_norm {
        return MatchScore {
            column: column.to_string(),
            field_key: field.key.clone(),
            score: 95.0,
            confidence: 0.95,
            method: MatchMethod::LabelMatch,
        };
    }

    let keyword = keyword_score(&column_norm, keywords_for(&field.key));
    let similarity = edit_similarity(&column_norm, &key_norm)
        .max(edit_similarity(&column_norm, &label_norm));

    let column_tokens = token_set(&column_norm);
    let overlap = jaccard(&column_tokens, &token_set(&key_norm))
        .max(jaccard(&column_tokens, &token_set(&label_norm)));

    let composite = KEYWORD_WEIGHT * keyword
        + SIMILARITY_WEIGHT * similarity
        + OVERLAP_WEIGHT * overlap;

    let (method, confidence) = if keyword > KEYWORD_METHOD_GATE {
        (MatchMethod::KeywordMatch, keyword)
    } else if similarity > FUZZY_METHOD_GATE {
        (MatchMethod::FuzzyMatch, similarity)
    } else if overlap > OVERLAP_METHOD_GATE {
        (MatchMethod::WordOverlap, overlap)
    } else {
        (MatchMethod::SemanticMatch, composite)
    };

    MatchScore {
        column: column.to_string(),
        field_key: field.key.clone(),
        score: composite * 100.0,
        confidence,
        method,
    }
}

/// Lowercase, underscores to spaces, runs of whitespace collapsed. Hyphens
/// are kept so hyphenated keywords like `e-mail` still compare literally.
fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words of a normalized string, split on whitespace, underscores, and
/// hyphens.
fn token_set(value: &str) -> BTreeSet<String> {
    value
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn edit_similarity(a: &str, b: &str) -> f64 {
    levenshtein::normalized_similarity(a.chars(), b.chars())
}

fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Average keyword contribution over the whole table, so a single grazing
/// hit in a long table stays weak.
fn keyword_score(column_norm: &str, keywords: &[(&str, f64)]) -> f64 {
    if keywords.is_empty() || column_norm.is_empty() {
        return 0.0;
    }
    let column_tokens = token_set(column_norm);
    let total: f64 = keywords
        .iter()
        .map(|(keyword, weight)| keyword_contribution(column_norm, &column_tokens, keyword, *weight))
        .sum();
    total / keywords.len() as f64
}

fn keyword_contribution(
    column_norm: &str,
    column_tokens: &BTreeSet<String>,
    keyword: &str,
    weight: f64,
) -> f64 {
    if column_norm.contains(keyword) {
        return weight;
    }
    if keyword.contains(column_norm) {
        return REVERSE_CONTAINMENT_FACTOR * weight;
    }

    let words: Vec<&str> = keyword.split_whitespace().collect();
    let matched = words
        .iter()
        .filter(|word| column_tokens.contains(**word))
        .count();
    if matched > 0 {
        return WORD_MATCH_FACTOR * weight * (matched as f64 / words.len() as f64);
    }

    let similarity = edit_similarity(column_norm, keyword);
    if similarity > KEYWORD_EDIT_GATE {
        return EDIT_MATCH_FACTOR * weight * similarity;
    }
    0.0
}

/// Coarse quality bucket for presenting a confidence to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchQuality {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.9 {
            Self::Excellent
        } else if confidence >= 0.7 {
            Self::Good
        } else if confidence >= 0.5 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use contact_model::{MatchMethod, SystemFieldDefinition, system_fields};

    use super::{DEFAULT_MIN_CONFIDENCE, MatchQuality, normalize, score_match, token_set};

    fn field(key: &str) -> SystemFieldDefinition {
        system_fields()
            .into_iter()
            .find(|field| field.key == key)
            .unwrap()
    }

    #[test]
    fn normalize_collapses_case_underscores_and_whitespace() {
        assert_eq!(normalize("  PHONE_NUMBER  "), "phone number");
        assert_eq!(normalize("Full\t Name"), "full name");
        assert_eq!(normalize("E-Mail"), "e-mail");
    }

    #[test]
    fn token_set_splits_on_hyphens_too() {
        let tokens = token_set("e-mail addres");
        assert!(tokens.contains("e"));
        assert!(tokens.contains("mail"));
        assert!(tokens.contains("addres"));
    }

    #[test]
    fn exact_key_match_is_certain() {
        let result = score_match("Email", &field("email"));
        assert_eq!(result.method, MatchMethod::ExactMatch);
        assert!((result.score - 100.0).abs() < f64::EPSILON);
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn underscored_header_matches_spaced_key() {
        let result = score_match("PHONE_NUMBER", &field("phone_number"));
        assert_eq!(result.method, MatchMethod::ExactMatch);
    }

    #[test]
    fn label_match_ranks_just_below_exact() {
        let result = score_match("Email Address", &field("email"));
        assert_eq!(result.method, MatchMethod::LabelMatch);
        assert!((result.score - 95.0).abs() < f64::EPSILON);
        assert!((result.confidence - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn misspelled_header_matches_by_edit_distance() {
        let result = score_match("E-Mail Addres", &field("email"));
        assert_eq!(result.method, MatchMethod::FuzzyMatch);
        assert!(result.confidence > 0.8);
        assert!(result.confidence >= DEFAULT_MIN_CONFIDENCE);
    }

    #[test]
    fn reordered_words_match_by_overlap() {
        let result = score_match("Email Address Work", &field("email"));
        assert_eq!(result.method, MatchMethod::WordOverlap);
        assert!(result.confidence > 0.6);
        assert!(result.confidence < 0.8);
    }

    #[test]
    fn unrelated_header_scores_below_the_floor() {
        for key in ["email", "name", "phone_number"] {
            let result = score_match("Internal Row Id", &field(key));
            assert_eq!(result.method, MatchMethod::SemanticMatch);
            assert!(result.confidence < DEFAULT_MIN_CONFIDENCE, "{key}");
        }
    }

    #[test]
    fn weak_cousin_headers_stay_below_the_floor() {
        // "Contact" brushes the name keywords and "Mobile" the phone ones,
        // but neither clears any method gate.
        let contact = score_match("Contact", &field("name"));
        assert!(contact.confidence < DEFAULT_MIN_CONFIDENCE);
        let mobile = score_match("Mobile", &field("phone_number"));
        assert!(mobile.confidence < DEFAULT_MIN_CONFIDENCE);
    }

    #[test]
    fn scores_stay_in_range_for_arbitrary_input() {
        let columns = [
            "",
            "_",
            "É",
            "Email",
            "e-mail addres",
            "completely unrelated header text with many words",
        ];
        for column in columns {
            for field in system_fields() {
                let result = score_match(column, &field);
                assert!(
                    (0.0..=100.0).contains(&result.score),
                    "{column} vs {}: {}",
                    field.key,
                    result.score
                );
                assert!(
                    (0.0..=1.0).contains(&result.confidence),
                    "{column} vs {}: {}",
                    field.key,
                    result.confidence
                );
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = score_match("E-Mail Addres", &field("email"));
        let second = score_match("E-Mail Addres", &field("email"));
        assert_eq!(first.score.to_bits(), second.score.to_bits());
        assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
        assert_eq!(first.method, second.method);
    }

    #[test]
    fn quality_buckets_split_at_documented_edges() {
        assert_eq!(MatchQuality::from_confidence(1.0), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_confidence(0.9), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_confidence(0.89), MatchQuality::Good);
        assert_eq!(MatchQuality::from_confidence(0.7), MatchQuality::Good);
        assert_eq!(MatchQuality::from_confidence(0.5), MatchQuality::Fair);
        assert_eq!(MatchQuality::from_confidence(0.49), MatchQuality::Poor);
        assert_eq!(MatchQuality::Poor.to_string(), "poor");
    }
}
