//! Industry trend research backed by the news gateway.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IndustryInput {
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub trends: Vec<String>,
}

/// POST /industry_trends/
///
/// Returns up to five recent headlines as `"{title} - {source name}"`.
pub async fn handle_industry_trends(
    State(state): State<AppState>,
    Json(input): Json<IndustryInput>,
) -> Result<Json<TrendsResponse>, ApiError> {
    let trends = state.news.headlines(&input.industry).await?;

    Ok(Json(TrendsResponse { trends }))
}
