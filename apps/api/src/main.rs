mod analysis;
mod config;
mod db;
mod errors;
mod models;
mod profiles;
mod reference;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::CareerData;
use crate::analysis::extractor::PdfTextExtractor;
use crate::config::Config;
use crate::db::create_store;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting DreamJob Navigator API v{}", env!("CARGO_PKG_VERSION"));

    // A malformed taxonomy is fatal: every analysis would be wrong.
    let career = CareerData::builtin()?;
    info!(
        "Loaded skill taxonomy with {} roles",
        career.taxonomy.roles().len()
    );

    let store = create_store(&config).await?;

    let state = AppState {
        store,
        extractor: Arc::new(PdfTextExtractor),
        career: Arc::new(career),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web client host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
