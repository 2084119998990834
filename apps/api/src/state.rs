use crate::llm_client::LlmClient;
use crate::news_client::NewsClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Clients are constructed once at startup and never mutated;
/// handlers hold no other state.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub news: NewsClient,
}
