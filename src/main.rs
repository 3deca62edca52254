mod config;
mod handlers;
mod routes;

use anyhow::Context;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("version-server starting");

    let config = Config::fixed();
    config.log_startup();

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    tracing::info!("Server running on port {}", config.service_port);

    axum::serve(listener, routes::app())
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
