//! Wiring configuration into a session.

use std::sync::Arc;

use lore_actions::{Actions, Explorer};
use lore_core::{GenerationConfig, LoreConfig};
use lore_database::LocationStore;
use lore_error::LoreResult;
use lore_flows::{LocationSummarizer, StoryGenerator};
use lore_interface::LoreDriver;
use lore_models::GeminiClient;
use tracing::{info, instrument};

/// The generation driver for `config`.
///
/// # Errors
///
/// Fails when no API key is configured.
pub fn build_driver(config: &GenerationConfig) -> LoreResult<Arc<dyn LoreDriver>> {
    Ok(Arc::new(GeminiClient::new(config)?))
}

/// A session using the Gemini driver and the configured store.
///
/// # Errors
///
/// Fails when the driver cannot be built. An unusable store is not an
/// error: reads come back empty and saves fail.
pub async fn build_explorer(config: &LoreConfig) -> LoreResult<Explorer> {
    let driver = build_driver(&config.generation)?;
    Ok(build_explorer_with(driver, config).await)
}

/// A session using `driver` and the configured store.
#[instrument(skip_all, fields(provider = driver.provider_name(), model = driver.model_name()))]
pub async fn build_explorer_with(driver: Arc<dyn LoreDriver>, config: &LoreConfig) -> Explorer {
    let store = LocationStore::from_config(&config.store).await;
    info!(store = ?store.backend_name(), "Explorer ready");

    let actions = Actions::new(
        StoryGenerator::new(driver.clone(), config.generation.clone()),
        LocationSummarizer::new(driver, config.generation.clone()),
        store,
    );
    Explorer::new(actions)
}
