//! Confidence Scorer — assigns a 0.0-1.0 confidence to each extracted value.
//!
//! These scores are presence/shape heuristics, not statistical estimates:
//! a value that passed its extraction pattern is trusted highly, a short
//! string less so, a missing value not at all. The scale is 0-1 everywhere
//! in the pipeline.

use serde::{Deserialize, Serialize};

/// An extracted field value. Serializes untagged, so JSON consumers see a
/// plain string, an array of strings, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Empty,
}

impl FieldValue {
    /// Wraps an optional extracted string, mapping `None` to `Empty`.
    pub fn from_text(value: Option<String>) -> Self {
        match value {
            Some(s) => FieldValue::Text(s),
            None => FieldValue::Empty,
        }
    }
}

/// Scoring rules, one per variant:
/// - `Empty` (and empty lists, and whitespace-only strings) score 0.0.
/// - Lists score 0.2 per entry, capped at 1.0 (5+ skills saturate).
/// - Strings shorter than 3 trimmed characters score 0.3.
/// - Longer strings passed their shape pattern upstream and score 0.95.
pub fn score(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Empty => 0.0,
        FieldValue::List(items) => {
            if items.is_empty() {
                0.0
            } else {
                (items.len() as f64 * 0.2).min(1.0)
            }
        }
        FieldValue::Text(s) => {
            let len = s.trim().chars().count();
            if len == 0 {
                0.0
            } else if len < 3 {
                0.3
            } else {
                0.95
            }
        }
    }
}
