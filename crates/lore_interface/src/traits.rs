//! Trait definitions for the generation service and the document store.

use async_trait::async_trait;
use lore_core::{GenerateRequest, GenerateResponse, SavedLocation};
use lore_error::LoreResult;

/// Core trait that every generation backend implements.
///
/// A driver turns a prompt (plus an optional response schema) into output
/// text or JSON. Drivers do not enforce timeouts; callers bound the call.
#[async_trait]
pub trait LoreDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> LoreResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}

/// A network- or process-backed collection of saved locations.
///
/// Implementations assign `id` and `created_at` themselves; `created_at`
/// must never go backwards across inserts.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert a new record and return it fully populated.
    async fn insert(&self, name: &str, summary: &str) -> LoreResult<SavedLocation>;

    /// All records, most recent first.
    async fn list_recent(&self) -> LoreResult<Vec<SavedLocation>>;

    /// Backend name for logs (e.g., "postgres", "memory").
    fn backend_name(&self) -> &'static str;
}
