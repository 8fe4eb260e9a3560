//! Entry point for the `gloss-gateway` HTTP server.

use std::sync::Arc;

use gloss_engine::UpstreamExplainer;
use gloss_gateway::{config::GatewayConfig, routes::create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();

    let engine = match UpstreamExplainer::new(&config.upstream_url) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!(url = %config.upstream_url, error = %e, "invalid upstream endpoint");
            std::process::exit(1);
        }
    };

    let app = create_router(Arc::new(engine), config.cors_layer());

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, upstream = %config.upstream_url, "gloss-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
