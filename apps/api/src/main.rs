mod config;
mod errors;
mod games;
mod models;
mod routes;
mod state;
mod vocabulary;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::vocabulary::{InMemoryVerbRepository, VerbRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting VerbGrid API v{}", env!("CARGO_PKG_VERSION"));

    // Verb repository: file-backed when VERBS_FILE is set, built-in catalog otherwise
    let repository = match &config.verbs_file {
        Some(path) => InMemoryVerbRepository::from_json_file(path)?,
        None => InMemoryVerbRepository::builtin(),
    };
    info!("Verb repository initialized ({} verbs)", repository.len());
    let verbs: Arc<dyn VerbRepository> = Arc::new(repository);

    let state = AppState::new(config.clone(), verbs);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
