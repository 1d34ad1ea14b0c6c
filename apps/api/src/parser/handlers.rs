//! Axum route handlers for the Resume Parsing API.

use anyhow::anyhow;
use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::parser::pipeline::{parse_resume, ResumeExtractionResult};

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    pub parsed: ResumeExtractionResult,
}

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload with a `file` field containing a PDF, pulls
/// the plain text out of it, and runs the parsing pipeline. The pipeline
/// itself cannot fail; only a missing file or unreadable PDF produces an
/// error response.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some(bytes);
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    // pdf-extract is CPU-bound; keep it off the async executor.
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&file))
        .await
        .map_err(|e| AppError::Internal(anyhow!(e)))?
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    info!("Extracted {} chars of resume text", text.len());

    Ok(Json(ParseResumeResponse {
        success: true,
        parsed: parse_resume(&text),
    }))
}

/// POST /api/v1/resumes/parse-text
///
/// Parses already-extracted plain text. An empty string is valid input and
/// produces a result with every field empty at confidence zero.
pub async fn handle_parse_text(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    Ok(Json(ParseResumeResponse {
        success: true,
        parsed: parse_resume(&request.text),
    }))
}
