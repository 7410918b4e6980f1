//! Scripted generation driver.

use async_trait::async_trait;
use lore_core::{GenerateRequest, GenerateResponse, Output};
use lore_error::{GenerationError, GenerationErrorKind, LoreResult};
use lore_interface::LoreDriver;
use serde_json::Value;
use std::sync::Mutex;

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Plain text output
    Text(String),
    /// Structured output, as a schema-aware driver returns it
    Json(Value),
    /// Driver failure
    Error(GenerationErrorKind),
    /// Never completes
    Hang,
}

/// Driver that replays a script; the last entry repeats once the script runs out.
pub struct MockDriver {
    script: Vec<MockResponse>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(value: Value) -> Self {
        Self::new(vec![MockResponse::Json(value)])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LoreDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> LoreResult<GenerateResponse> {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };
        let response = self
            .script
            .get(n)
            .or(self.script.last())
            .cloned()
            .unwrap_or(MockResponse::Error(GenerationErrorKind::EmptyResponse));

        match response {
            MockResponse::Text(text) => Ok(GenerateResponse::from_text(text)),
            MockResponse::Json(value) => Ok(GenerateResponse {
                outputs: vec![Output::Json(value)],
            }),
            MockResponse::Error(kind) => Err(GenerationError::new(kind).into()),
            MockResponse::Hang => std::future::pending().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
