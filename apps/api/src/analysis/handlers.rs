//! Axum route handlers for the JD Analysis API.

use axum::Json;
use serde::Deserialize;

use crate::analysis::report::{analyze_jd, JdAnalysis};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AnalyzeJdRequest {
    pub jd_text: String,
    #[serde(default)]
    pub key_skills: Vec<String>,
}

/// POST /api/v1/jd/analyze
///
/// Scores a job description text for readability, non-inclusive language,
/// and SEO keywords. Runs synchronously; the analyzers are pure functions.
pub async fn handle_analyze_jd(
    Json(request): Json<AnalyzeJdRequest>,
) -> Result<Json<JdAnalysis>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    Ok(Json(analyze_jd(&request.jd_text, &request.key_skills)))
}
