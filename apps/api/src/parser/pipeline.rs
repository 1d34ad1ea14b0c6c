//! Resume Parsing Pipeline — field extraction plus confidence scoring over
//! one document. A pure function of the input text: no I/O, no shared state,
//! safe to call concurrently from any number of request handlers.
//!
//! Extraction failure is a normal outcome, not an error. A document that
//! yields nothing produces a result with every field `Empty` at confidence
//! 0.0, and an empty input string is valid.

use serde::{Deserialize, Serialize};

use crate::parser::confidence::{score, FieldValue};
use crate::parser::fields::extract_fields;

/// One extracted field with its confidence score.
/// Invariant: an `Empty` value (or empty list) always carries confidence 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub value: FieldValue,
    pub confidence: f64,
}

impl ExtractedField {
    fn new(value: FieldValue) -> Self {
        let confidence = score(&value);
        ExtractedField { value, confidence }
    }
}

/// Structured parse result. All seven fields are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeExtractionResult {
    pub name: ExtractedField,
    pub email: ExtractedField,
    pub phone: ExtractedField,
    pub skills: ExtractedField,
    pub experience: ExtractedField,
    pub projects: ExtractedField,
    pub education: ExtractedField,
}

/// Parses resume text into structured fields with confidence scores.
pub fn parse_resume(text: &str) -> ResumeExtractionResult {
    let raw = extract_fields(text);

    ResumeExtractionResult {
        name: ExtractedField::new(FieldValue::from_text(raw.name)),
        email: ExtractedField::new(FieldValue::from_text(raw.email)),
        phone: ExtractedField::new(FieldValue::from_text(raw.phone)),
        skills: ExtractedField::new(if raw.skills.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::List(raw.skills)
        }),
        experience: ExtractedField::new(FieldValue::from_text(raw.experience)),
        projects: ExtractedField::new(FieldValue::from_text(raw.projects)),
        education: ExtractedField::new(FieldValue::from_text(raw.education)),
    }
}
