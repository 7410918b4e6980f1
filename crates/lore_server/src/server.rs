//! Listener and shutdown handling.

use std::sync::Arc;

use lore_actions::Explorer;
use lore_core::ServerConfig;
use lore_error::{LoreResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

use crate::create_router;

/// Serve the API on `config.bind` until Ctrl-C.
///
/// The explorer's saved list is loaded before the listener starts.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Bind`] if the address cannot be bound and
/// [`ServerErrorKind::Serve`] if the server loop fails.
#[instrument(skip_all, fields(bind = %config.bind()))]
pub async fn serve(config: &ServerConfig, explorer: Arc<Explorer>) -> LoreResult<()> {
    let listener = TcpListener::bind(config.bind()).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: config.bind().clone(),
            message: e.to_string(),
        })
    })?;

    let loaded = explorer.load().await;
    let address = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| config.bind().clone());
    info!(%address, saved = loaded, "Lore Explorer API listening");

    axum::serve(listener, create_router(explorer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping gracefully");
}
