use std::sync::Arc;

use anyhow::Context;
use catalogo_api::{app, ApiConfig};
use catalogo_auth::StaticTokenValidator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalogo_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(?config, "starting catalogo-api");

    let store = app::services::build_store(&config).await;
    let validator = Arc::new(StaticTokenValidator::new(config.token.clone()));
    let router = app::build_app(store, validator);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
