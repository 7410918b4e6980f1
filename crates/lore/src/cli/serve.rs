//! HTTP server command handler.

use std::sync::Arc;

use lore_actions::Explorer;
use lore_core::LoreConfig;

use super::CliResult;

/// Serve the JSON API, optionally overriding the configured bind address.
pub async fn run_server(config: &LoreConfig, explorer: Explorer, bind: Option<String>) -> CliResult {
    let server = match bind {
        Some(bind) => config.server.clone().with_bind(bind),
        None => config.server.clone(),
    };

    lore_server::serve(&server, Arc::new(explorer)).await?;
    Ok(())
}
