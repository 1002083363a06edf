//! Portfolio site server: Leptos SSR pages plus static assets.

#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| format!("configuration: {e}"))?;
    if !config.public_dir.is_dir() {
        tracing::warn!(dir = %config.public_dir.display(), "public asset directory missing");
    }

    let app = routes::app(&config)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;

    tracing::info!(%addr, compression = config.compression, "folio listening");
    axum::serve(listener, app).await.map_err(|e| format!("serve: {e}"))
}
