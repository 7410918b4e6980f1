//! Test utilities for workflow tests.

pub mod mock_driver;

use std::sync::Arc;

use lore_actions::{Actions, Explorer};
use lore_core::GenerationConfig;
use lore_database::{InMemoryLocationRepository, LocationStore};
use lore_flows::{LocationSummarizer, StoryGenerator};

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, Reply};

/// Actions over `driver` and `store` with default generation settings.
pub fn actions_with(driver: Arc<MockDriver>, store: LocationStore) -> Actions {
    let config = GenerationConfig::default();
    Actions::new(
        StoryGenerator::new(driver.clone(), config.clone()),
        LocationSummarizer::new(driver, config),
        store,
    )
}

/// A session over `driver` and a fresh in-memory store.
#[allow(dead_code)]
pub fn explorer_with(driver: Arc<MockDriver>) -> (Explorer, InMemoryLocationRepository) {
    let repository = InMemoryLocationRepository::new();
    let store = LocationStore::new(Arc::new(repository.clone()));
    (Explorer::new(actions_with(driver, store)), repository)
}
