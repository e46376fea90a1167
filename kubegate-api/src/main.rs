//! kubegate API server entry point

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use kubegate_api::api;
use kubegate_api::config::GatewayConfig;
use kubegate_api::kubernetes::client::KubeClient;
use kubegate_api::logging;
use kubegate_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::load();

    // The guard keeps the non-blocking file writer flushing until exit
    let _log_guard = logging::init(&config.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Starting kubegate API v{}", env!("CARGO_PKG_VERSION"));

    let kube = KubeClient::connect(&config.kubernetes)
        .await
        .context("failed to connect to the Kubernetes control plane")?;
    info!("Connected to Kubernetes API server at {}", kube.api_server());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(kube, config);
    let app = api::router(state);

    info!("kubegate API listening on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
