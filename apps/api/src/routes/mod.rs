pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics;
use crate::content::handlers as content_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;
use crate::trends;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate_post/", post(content_handlers::handle_generate_post))
        .route("/upload_resume/", post(resume_handlers::handle_upload_resume))
        .route("/industry_trends/", post(trends::handle_industry_trends))
        .route(
            "/content_strategy/",
            post(content_handlers::handle_content_strategy),
        )
        .route("/mock_analytics/", post(analytics::handle_mock_analytics))
        .route(
            "/generate_advanced_content/",
            post(content_handlers::handle_generate_advanced_content),
        )
        .with_state(state)
}
