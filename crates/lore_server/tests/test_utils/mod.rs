//! Test utilities for API tests.

use std::sync::Arc;

use async_trait::async_trait;
use lore_actions::{Actions, Explorer};
use lore_core::{GenerateRequest, GenerateResponse, GenerationConfig, Output};
use lore_database::{InMemoryLocationRepository, LocationStore};
use lore_error::{GenerationError, GenerationErrorKind, LoreResult};
use lore_flows::{LocationSummarizer, StoryGenerator};
use lore_interface::LoreDriver;
use serde_json::json;

/// Driver answering every story and summary request with fixed content,
/// or failing every request.
pub struct CannedDriver {
    fail: bool,
}

#[async_trait]
impl LoreDriver for CannedDriver {
    async fn generate(&self, req: &GenerateRequest) -> LoreResult<GenerateResponse> {
        if self.fail {
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: 500,
                message: "internal".into(),
            })
            .into());
        }

        let wants_story = req
            .response_schema
            .as_ref()
            .is_some_and(|schema| schema["properties"].get("title").is_some());
        let value = if wants_story {
            json!({"title": "Stone and Sand", "story": "Carved from rose cliffs.\n\nLost for centuries."})
        } else {
            json!({"summary": "Nabataean city carved into sandstone."})
        };
        Ok(GenerateResponse {
            outputs: vec![Output::Json(value)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}

/// A session with the canned driver over `store`.
pub fn explorer(fail: bool, store: LocationStore) -> Arc<Explorer> {
    let driver: Arc<dyn LoreDriver> = Arc::new(CannedDriver { fail });
    let config = GenerationConfig::default();
    let actions = Actions::new(
        StoryGenerator::new(driver.clone(), config.clone()),
        LocationSummarizer::new(driver, config),
        store,
    );
    Arc::new(Explorer::new(actions))
}

/// A working session over a fresh in-memory store.
pub fn memory_explorer() -> Arc<Explorer> {
    explorer(
        false,
        LocationStore::new(Arc::new(InMemoryLocationRepository::new())),
    )
}
