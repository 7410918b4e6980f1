//! Structured-output invocation.

use lore_core::{GenerateRequest, GenerationConfig, Message, OutputShape};
use lore_error::{BuilderError, GenerationError, GenerationErrorKind, LoreResult};
use lore_interface::LoreDriver;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::extract_json;

/// Send `prompt` with a declared output shape and parse the answer into `T`.
///
/// The request carries the rendered JSON schema, and the prompt is extended
/// with a plain-language description of the shape for drivers that ignore
/// schemas. The whole call, retries included, is bounded by
/// `config.timeout_secs`.
///
/// # Errors
///
/// All failures are [`GenerationError`]s:
/// - the driver's own error (transport, HTTP status, blocked, ...)
/// - [`GenerationErrorKind::Timeout`] when the call outlives the timeout
/// - [`GenerationErrorKind::MalformedOutput`] when no JSON object can be
///   recovered, a declared field is missing or blank, or `T` cannot be
///   deserialized
#[instrument(
    skip(driver, prompt, config),
    fields(
        shape = %shape.name,
        provider = driver.provider_name(),
        prompt_len = prompt.len()
    )
)]
pub async fn invoke_structured<T: DeserializeOwned>(
    driver: &dyn LoreDriver,
    prompt: &str,
    shape: &OutputShape,
    config: &GenerationConfig,
) -> LoreResult<T> {
    let request = GenerateRequest::builder()
        .messages(vec![Message::user(format!(
            "{}\n\n{}",
            prompt,
            shape.instruction()
        ))])
        .temperature(*config.temperature())
        .max_tokens(*config.max_output_tokens())
        .response_schema(shape.to_json_schema())
        .build()
        .map_err(|e| BuilderError::from(e.to_string()))?;

    let timeout_secs = *config.timeout_secs();
    let response = match tokio::time::timeout(config.timeout(), driver.generate(&request)).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(timeout_secs, "Generation call timed out");
            return Err(GenerationError::new(GenerationErrorKind::Timeout(timeout_secs)).into());
        }
    };

    let value = match response.json() {
        Some(value) => value.clone(),
        None => {
            debug!("Driver returned text, extracting JSON");
            let text = response.text();
            let json = extract_json(&text)?;
            serde_json::from_str::<Value>(&json).map_err(|e| malformed(format!("Invalid JSON: {}", e)))?
        }
    };

    let missing = shape.missing_fields(&value);
    if !missing.is_empty() {
        warn!(?missing, "Structured output is missing fields");
        return Err(malformed(format!(
            "Missing or empty fields: {}",
            missing.join(", ")
        ))
        .into());
    }

    serde_json::from_value(value).map_err(|e| malformed(e.to_string()).into())
}

#[track_caller]
fn malformed(message: String) -> GenerationError {
    GenerationError::new(GenerationErrorKind::MalformedOutput(message))
}
