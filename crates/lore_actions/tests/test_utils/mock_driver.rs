//! Generation driver that answers story and summary requests separately.

use async_trait::async_trait;
use lore_core::{GenerateRequest, GenerateResponse, Output};
use lore_error::{GenerationError, GenerationErrorKind, LoreResult};
use lore_interface::LoreDriver;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// How the mock answers one kind of request.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Reply {
    /// Structured output
    Json(Value),
    /// Structured output after a delay
    Delayed(Duration, Value),
    /// Driver failure
    Error(GenerationErrorKind),
}

/// Scripted driver distinguishing story requests (schema with `title`) from
/// summary requests.
pub struct MockDriver {
    story: Mutex<Reply>,
    summary: Mutex<Reply>,
    story_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl MockDriver {
    /// A driver that tells a two-paragraph story and a one-line summary for
    /// whatever location it is asked about.
    pub fn storyteller() -> Self {
        Self {
            story: Mutex::new(Reply::Json(json!({
                "title": "The Iron Lady",
                "story": "Gustave Eiffel's tower rose for the 1889 World's Fair.\n\n\
                          Critics called it an eyesore; Parisians came to love it."
            }))),
            summary: Mutex::new(Reply::Json(json!({
                "summary": "A wrought-iron lattice tower on the Champ de Mars, completed in 1889."
            }))),
            story_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_story(self, reply: Reply) -> Self {
        *self.story.lock().unwrap() = reply;
        self
    }

    #[allow(dead_code)]
    pub fn with_summary(self, reply: Reply) -> Self {
        *self.summary.lock().unwrap() = reply;
        self
    }

    #[allow(dead_code)]
    pub fn set_story(&self, reply: Reply) {
        *self.story.lock().unwrap() = reply;
    }

    pub fn story_calls(&self) -> usize {
        self.story_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    fn is_story_request(req: &GenerateRequest) -> bool {
        req.response_schema
            .as_ref()
            .and_then(|schema| schema.get("properties"))
            .is_some_and(|props| props.get("title").is_some())
    }
}

#[async_trait]
impl LoreDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> LoreResult<GenerateResponse> {
        let reply = if Self::is_story_request(req) {
            self.story_calls.fetch_add(1, Ordering::SeqCst);
            self.story.lock().unwrap().clone()
        } else {
            self.summary_calls.fetch_add(1, Ordering::SeqCst);
            self.summary.lock().unwrap().clone()
        };

        match reply {
            Reply::Json(value) => Ok(GenerateResponse {
                outputs: vec![Output::Json(value)],
            }),
            Reply::Delayed(delay, value) => {
                tokio::time::sleep(delay).await;
                Ok(GenerateResponse {
                    outputs: vec![Output::Json(value)],
                })
            }
            Reply::Error(kind) => Err(GenerationError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
