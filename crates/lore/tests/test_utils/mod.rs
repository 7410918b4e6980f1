//! Test utilities for end-to-end wiring tests.

use async_trait::async_trait;
use lore::{GenerateRequest, GenerateResponse, LoreDriver, LoreResult, Output};
use serde_json::json;

/// Driver that answers story and summary requests with fixed content.
pub struct CannedDriver;

#[async_trait]
impl LoreDriver for CannedDriver {
    async fn generate(&self, req: &GenerateRequest) -> LoreResult<GenerateResponse> {
        let wants_story = req
            .response_schema
            .as_ref()
            .is_some_and(|schema| schema["properties"].get("title").is_some());
        let value = if wants_story {
            json!({"title": "The Iron Lady", "story": "Built for a fair.\n\nNever taken down."})
        } else {
            json!({"summary": "Wrought-iron lattice tower on the Champ de Mars."})
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

/// Write `toml` to a temporary file and return its handle.
pub fn config_file(toml: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(toml.as_bytes()).expect("write temp config");
    file
}
