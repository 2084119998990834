//! Mock engagement analytics. No upstream calls, no state.

use axum::Json;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Analytics {
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: Analytics,
}

/// POST /mock_analytics/
///
/// Three independent uniform draws; ranges are inclusive.
pub async fn handle_mock_analytics() -> Json<AnalyticsResponse> {
    let mut rng = rand::thread_rng();

    Json(AnalyticsResponse {
        analytics: Analytics {
            views: rng.gen_range(300..=5000),
            likes: rng.gen_range(50..=800),
            comments: rng.gen_range(5..=100),
        },
    })
}
