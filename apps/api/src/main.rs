mod analysis;
mod config;
mod dataset;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::keywords::Taxonomy;
use crate::config::Config;
use crate::dataset::ingest::load_csv_file;
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

    info!("Starting Vacancy Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Fails fast on a malformed category
    let taxonomy = Taxonomy::jdr().context("Invalid JD-R keyword taxonomy")?;
    info!(
        "JD-R taxonomy loaded: {} demand and {} resource categories",
        taxonomy.demands.categories().len(),
        taxonomy.resources.categories().len()
    );

    let state = AppState::new(config.clone(), taxonomy);

    if let Some(path) = &config.dataset_path {
        let dataset = load_csv_file(path)
            .with_context(|| format!("Failed to load DATASET_PATH {}", path.display()))?;
        state.replace_dataset(dataset).await;
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
