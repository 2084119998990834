//! Axum route handlers for the content endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::content::post_type::PostType;
use crate::content::prompts;
use crate::errors::ApiError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub user_role: String,
    pub industry: String,
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: String,
}

#[derive(Debug, Deserialize)]
pub struct StrategyInput {
    pub user_role: String,
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub strategy: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentTypeRequest {
    pub user_role: String,
    pub industry: String,
    pub topic: String,
    /// One of "article" | "update" | "carousel"; validated in the handler.
    pub post_type: String,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate_post/
///
/// Builds a single post prompt and returns the completion verbatim.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let prompt = prompts::post_prompt(&request.user_role, &request.industry, &request.topic);

    let post = state.llm.complete(&prompt).await?;

    Ok(Json(PostResponse { post }))
}

/// POST /content_strategy/
pub async fn handle_content_strategy(
    State(state): State<AppState>,
    Json(request): Json<StrategyInput>,
) -> Result<Json<StrategyResponse>, ApiError> {
    let prompt = prompts::strategy_prompt(&request.user_role, &request.industry);

    let strategy = state.llm.complete(&prompt).await?;

    Ok(Json(StrategyResponse { strategy }))
}

/// POST /generate_advanced_content/
///
/// Rejects unknown `post_type` values before any gateway call is made.
pub async fn handle_generate_advanced_content(
    State(state): State<AppState>,
    Json(request): Json<ContentTypeRequest>,
) -> Result<Json<ContentResponse>, ApiError> {
    let post_type: PostType = request.post_type.parse()?;

    let prompt = prompts::advanced_content_prompt(
        post_type,
        &request.user_role,
        &request.industry,
        &request.topic,
    );

    let content = state.llm.complete(&prompt).await?;

    Ok(Json(ContentResponse { content }))
}
