mod analytics;
mod config;
mod content;
mod errors;
mod llm_client;
mod news_client;
mod resume;
mod routes;
mod state;
mod trends;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::news_client::NewsClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting linkpulse API v{}", env!("CARGO_PKG_VERSION"));

    // Gateway clients are constructed once and injected; handlers never read
    // credentials ad hoc.
    let llm = LlmClient::new(config.openrouter_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let news = NewsClient::new(config.news_api_key.clone());
    info!("News client initialized");

    let state = AppState { llm, news };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
