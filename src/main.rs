//! Glow Advisor server binary.
//!
//! Bootstraps configuration, tracing, the database pool, and the dialog
//! pipeline, then serves the chat endpoint.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use glow_advisor::adapters::gemini::{GeminiConfig, GeminiGenerator};
use glow_advisor::adapters::http::chat::{app_router, ChatAppState};
use glow_advisor::adapters::postgres::{PostgresFaqStore, PostgresProductCatalog};
use glow_advisor::adapters::sentiment::WordlistSentimentProbe;
use glow_advisor::adapters::tokenizer::WhitespaceTokenizer;
use glow_advisor::application::DialogOrchestrator;
use glow_advisor::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let gemini_config = GeminiConfig::new(
        config.generation.gemini_api_key.clone().unwrap_or_default(),
    )
    .with_model(config.generation.model.clone())
    .with_base_url(config.generation.base_url.clone())
    .with_timeout(config.generation.timeout());

    let orchestrator = DialogOrchestrator::new(
        Arc::new(PostgresProductCatalog::new(pool.clone())),
        Arc::new(PostgresFaqStore::new(pool)),
        Arc::new(GeminiGenerator::new(gemini_config)),
        Arc::new(WordlistSentimentProbe::new()),
        Arc::new(WhitespaceTokenizer::new()),
    )
    .with_prepend_empathy(config.features.prepend_empathy);

    let state = ChatAppState::new(Arc::new(orchestrator));
    let app = app_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
