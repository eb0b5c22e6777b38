mod config;
mod envelope;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod search;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::generator::JobDescriptionGenerator;
use crate::llm_client::{ChatModel, LlmClient};
use crate::routes::build_router;
use crate::search::client::{CandidateSource, SalesNavigatorClient};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm: Arc<dyn ChatModel> = Arc::new(LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        &config.openai_base_url,
    )?);
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize candidate search client
    let candidates: Arc<dyn CandidateSource> = Arc::new(SalesNavigatorClient::new(
        config.rapidapi_key.clone(),
        config.rapidapi_host.clone(),
    )?);
    info!("Sales Navigator client initialized (host: {})", config.rapidapi_host);

    // Build app state
    let state = AppState {
        generator: JobDescriptionGenerator::new(llm),
        candidates,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the deployed frontend origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
