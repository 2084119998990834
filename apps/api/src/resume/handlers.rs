//! Axum route handler for resume upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::errors::ApiError;
use crate::resume::{extract, prompts};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// POST /upload_resume/
///
/// Reads the uploaded PDF from the first multipart field, extracts its text
/// and asks the LLM for skills / experience / education. Extraction failures
/// surface before any gateway call is made.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let field = multipart.next_field().await?.ok_or(ApiError::MissingFile)?;
    let contents: Bytes = field.bytes().await?;

    debug!("received resume upload ({} bytes)", contents.len());

    let text = extract::extract_pdf_text(&contents)?;
    let prompt = prompts::resume_analysis_prompt(&text);

    let analysis = state.llm.complete(&prompt).await?;

    Ok(Json(AnalysisResponse { analysis }))
}
