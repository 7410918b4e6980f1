//! Request and response types for the generation service.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use lore_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(100u32)
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// assert!(request.response_schema.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default, setter(strip_option))]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0)
    #[builder(default, setter(strip_option))]
    pub temperature: Option<f32>,
    /// Model identifier overriding the driver default
    #[builder(default, setter(strip_option))]
    pub model: Option<String>,
    /// JSON schema the response must conform to
    #[builder(default, setter(strip_option))]
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Concatenated text of all system messages, if any.
    pub fn system_instruction(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.text.as_str())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }

    /// Messages excluding system instructions, in order.
    pub fn conversation(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }
}

/// Output produced by the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output, already parsed by the driver.
    Json(serde_json::Value),
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use lore_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("{\"summary\": \"A harbour town.\"}".to_string())],
/// };
///
/// assert_eq!(response.text(), "{\"summary\": \"A harbour town.\"}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Create a response holding a single text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// All text outputs joined together; JSON outputs are rendered compactly.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.clone(),
                Output::Json(value) => value.to_string(),
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// The first structured output, if the driver returned one.
    pub fn json(&self) -> Option<&serde_json::Value> {
        self.outputs.iter().find_map(|output| match output {
            Output::Json(value) => Some(value),
            Output::Text(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_are_split_from_conversation() {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system("Be brief."),
                Message::user("Describe Lisbon."),
                Message::system("Use English."),
            ])
            .build()
            .unwrap();

        assert_eq!(
            request.system_instruction().as_deref(),
            Some("Be brief.\nUse English.")
        );
        let conversation: Vec<_> = request.conversation().collect();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation[0].text, "Describe Lisbon.");
    }

    #[test]
    fn builder_requires_messages() {
        assert!(GenerateRequest::builder().build().is_err());
    }

    #[test]
    fn response_prefers_first_json_output() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Text("preamble".into()),
                Output::Json(serde_json::json!({"summary": "ok"})),
            ],
        };
        assert_eq!(response.json().unwrap()["summary"], "ok");
    }
}
