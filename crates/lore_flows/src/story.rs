//! Story Generator.

use std::sync::Arc;

use lore_core::{GenerationConfig, LocationQuery, Story};
use lore_error::LoreResult;
use lore_interface::LoreDriver;
use tracing::{info, instrument};

use crate::{invoke_structured, story_prompt};

/// Turns a location into a titled narrative.
///
/// Holds no state beyond its collaborators; each call is one outbound
/// generation request.
#[derive(Clone)]
pub struct StoryGenerator {
    driver: Arc<dyn LoreDriver>,
    config: GenerationConfig,
}

impl std::fmt::Debug for StoryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish()
    }
}

impl StoryGenerator {
    /// Create a generator over `driver`.
    pub fn new(driver: Arc<dyn LoreDriver>, config: GenerationConfig) -> Self {
        Self { driver, config }
    }

    /// Generate a story about `location`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`](lore_error::GenerationError) when the
    /// call fails, times out, or comes back without a title or body.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn generate(&self, location: &LocationQuery) -> LoreResult<Story> {
        let prompt = story_prompt(location.as_str());
        let story: Story =
            invoke_structured(self.driver.as_ref(), &prompt, &Story::shape(), &self.config).await?;

        info!(
            title = %story.title,
            paragraphs = story.paragraphs().count(),
            "Story generated"
        );
        Ok(story)
    }
}
