//! Google Gemini API implementation.
//!
//! [`GeminiClient`] posts to `{base_url}/models/{model}:generateContent`.
//! Requests that carry a response schema are sent with
//! `responseMimeType = "application/json"`, and their text is parsed into
//! [`Output::Json`] when it is valid JSON.
//!
//! # Example
//!
//! ```no_run
//! use lore_core::{GenerateRequest, GenerationConfig, LocationSummary, Message};
//! use lore_interface::LoreDriver;
//! use lore_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GenerationConfig::default().with_api_key("key");
//! let client = GeminiClient::new(&config)?;
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Summarize Kyoto for a visitor.")])
//!     .response_schema(LocationSummary::shape().to_json_schema())
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.json());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use lore_core::{GenerateRequest, GenerateResponse, GenerationConfig, Output, Role};
use lore_error::{GenerationError, GenerationErrorKind, LoreResult};
use lore_interface::LoreDriver;

use super::GeminiResult;
use super::dto::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfigDto,
};
use crate::{LlmMetrics, classify_error};

/// Finish reasons that mean the model withheld its answer.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
    "SPII",
];

/// Client for the Google Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    /// Default model name when req.model is None
    model_name: String,
    temperature: f32,
    max_output_tokens: u32,
    /// Retry configuration
    max_retries: usize,
    retry_backoff_ms: Option<u64>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from the generation settings.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::MissingApiKey`] when no key is
    /// configured, or [`GenerationErrorKind::ClientCreation`] when the HTTP
    /// client cannot be built.
    #[instrument(name = "gemini_client_new", skip(config), fields(model = %config.model()))]
    pub fn new(config: &GenerationConfig) -> LoreResult<Self> {
        Self::new_internal(config).map_err(Into::into)
    }

    fn new_internal(config: &GenerationConfig) -> GeminiResult<Self> {
        let api_key = config
            .api_key()
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("lore/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            model_name: config.model().clone(),
            temperature: *config.temperature(),
            max_output_tokens: *config.max_output_tokens(),
            max_retries: *config.max_retries(),
            retry_backoff_ms: *config.retry_backoff_ms(),
        })
    }

    /// REST endpoint for a model.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Translate a provider-neutral request into the wire format.
    fn build_body(&self, req: &GenerateRequest) -> GenerateContentRequest {
        let contents = req
            .conversation()
            .map(|msg| {
                let role = match msg.role {
                    Role::Assistant => "model",
                    Role::User | Role::System => "user",
                };
                Content::text(Some(role), msg.text.clone())
            })
            .collect();

        let system_instruction = req
            .system_instruction()
            .map(|text| Content::text(None, text));

        let generation_config = GenerationConfigDto {
            temperature: Some(req.temperature.unwrap_or(self.temperature)),
            max_output_tokens: Some(req.max_tokens.unwrap_or(self.max_output_tokens)),
            response_mime_type: req
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: req.response_schema.clone(),
        };

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// One HTTP round trip, without retry.
    async fn send_once(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|envelope| match envelope.error.status {
                    Some(code) => format!("{} ({})", envelope.error.message, code),
                    None => envelope.error.message,
                })
                .unwrap_or_else(|_| text.chars().take(200).collect());
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        serde_json::from_str(&text).map_err(|e| {
            GenerationError::new(GenerationErrorKind::MalformedOutput(format!(
                "Unparseable response body: {}",
                e
            )))
        })
    }

    /// Send with automatic retry of transient failures.
    ///
    /// The first failure decides the backoff strategy; configured overrides
    /// replace the error's own retry count and initial backoff.
    async fn send_with_retry(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        let first = self.send_once(url, body).await;
        let err = match first {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if !err.kind.is_retryable() || self.max_retries == 0 {
            warn!(error = %err, "Permanent generation error, failing immediately");
            return Err(err);
        }

        let (mut initial_ms, _, max_delay_secs) = err.kind.retry_strategy_params();
        if let Some(override_backoff) = self.retry_backoff_ms {
            initial_ms = override_backoff;
        }
        let retries = self.max_retries;

        info!(
            error = %err,
            initial_backoff_ms = initial_ms,
            max_retries = retries,
            max_delay_secs,
            "Generation request failed, will retry with configured strategy"
        );

        let mut delays = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(retries);

        // The first attempt already happened; wait before the first retry.
        // `Retry::spawn` attempts immediately, then sleeps through the rest.
        if let Some(first_delay) = delays.next() {
            debug!(delay_ms = first_delay.as_millis() as u64, "Backing off before retry");
            tokio::time::sleep(first_delay).await;
        }
        Retry::spawn(delays, move || async move {
            match self.send_once(url, body).await {
                Ok(response) => Ok(response),
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "Generation request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent generation error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }

    /// Turn a wire response into outputs.
    fn convert_response(
        response: GenerateContentResponse,
        structured: bool,
    ) -> GeminiResult<GenerateResponse> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(GenerationError::new(GenerationErrorKind::Blocked(reason)));
            }
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return match candidate.finish_reason {
                Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) => {
                    Err(GenerationError::new(GenerationErrorKind::Blocked(reason)))
                }
                _ => Err(GenerationError::new(GenerationErrorKind::EmptyResponse)),
            };
        }

        if structured {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
                return Ok(GenerateResponse {
                    outputs: vec![Output::Json(value)],
                });
            }
            debug!("Structured request returned non-JSON text, passing through");
        }

        Ok(GenerateResponse::from_text(text))
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        let url = self.endpoint(model);
        let body = self.build_body(req);

        let response = self.send_with_retry(&url, &body).await?;

        if let Some(total) = response
            .usage_metadata
            .as_ref()
            .and_then(|usage| usage.total_token_count)
        {
            LlmMetrics::get().record_tokens(model, total);
        }

        Self::convert_response(response, req.response_schema.is_some())
    }
}

#[async_trait]
impl LoreDriver for GeminiClient {
    #[instrument(
        skip(self, req),
        fields(
            provider = "gemini",
            model = req.model.as_deref().unwrap_or(&self.model_name),
            structured = req.response_schema.is_some()
        )
    )]
    async fn generate(&self, req: &GenerateRequest) -> LoreResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model_name).to_string();
        let start = Instant::now();

        match self.generate_internal(req).await {
            Ok(response) => {
                let elapsed = start.elapsed().as_secs_f64();
                LlmMetrics::get().record_request("gemini", &model, elapsed);
                debug!(elapsed_secs = elapsed, "Gemini request succeeded");
                Ok(response)
            }
            Err(e) => {
                LlmMetrics::get().record_error("gemini", &model, classify_error(&e));
                Err(e.into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
