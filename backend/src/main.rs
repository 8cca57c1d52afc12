#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use portfolio_server::{config::ServerConfig, site};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env loaded: {}", e);
    }

    let config = ServerConfig::from_env().context("Loading server config")?;

    if !config.site_dir.is_dir() {
        warn!("Site directory {} does not exist", config.site_dir.display());
    }
    if !config.wasm_bundle_present() {
        warn!(
            "No particle wasm bundle in {}, the canvas backdrop will not start; typing and counters fall back to the page script",
            config.wasm_pkg_dir.display()
        );
    }

    let app = site::router(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Binding {addr}"))?;
    info!(
        "Serving {} on http://{}",
        config.site_dir.display(),
        addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
