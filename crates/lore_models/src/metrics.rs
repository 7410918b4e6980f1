//! Metrics for generation service calls.
//!
//! Instruments are created on the global OpenTelemetry meter. Without an
//! installed meter provider they are no-ops.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Metrics for generation service interactions.
///
/// Labeled with provider and model name.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total generation requests
    pub requests: Counter<u64>,
    /// Failed generation requests
    pub errors: Counter<u64>,
    /// Call duration in seconds
    pub duration: Histogram<f64>,
    /// Total tokens used (prompt + completion)
    pub tokens_used: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("lore_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Total generation requests")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed generation requests")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("Generation call duration")
                .build(),
            tokens_used: meter
                .u64_counter("llm.tokens")
                .with_description("Total tokens used (prompt + completion)")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record token usage reported by the service.
    pub fn record_tokens(&self, model: &str, total_tokens: u64) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.tokens_used.add(total_tokens, labels);
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "network", "timeout", "invalid_request", "unknown"
pub fn classify_error(error: &dyn std::error::Error) -> &'static str {
    let error_str = error.to_string().to_lowercase();

    if error_str.contains("rate limit") || error_str.contains("429") {
        "rate_limit"
    } else if error_str.contains("auth")
        || error_str.contains("401")
        || error_str.contains("403")
        || error_str.contains("api_key")
    {
        "auth"
    } else if error_str.contains("timed out") || error_str.contains("timeout") {
        "timeout"
    } else if error_str.contains("network")
        || error_str.contains("connection")
        || error_str.contains("request failed")
    {
        "network"
    } else if error_str.contains("400") || error_str.contains("malformed") {
        "invalid_request"
    } else {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_error::{GenerationError, GenerationErrorKind};

    #[test]
    fn classifies_generation_errors() {
        let rate = GenerationError::new(GenerationErrorKind::HttpError {
            status_code: 429,
            message: "Resource exhausted".into(),
        });
        assert_eq!(classify_error(&rate), "rate_limit");

        let key = GenerationError::new(GenerationErrorKind::MissingApiKey);
        assert_eq!(classify_error(&key), "auth");

        let transport = GenerationError::new(GenerationErrorKind::Transport("reset".into()));
        assert_eq!(classify_error(&transport), "network");

        let malformed = GenerationError::new(GenerationErrorKind::MalformedOutput("x".into()));
        assert_eq!(classify_error(&malformed), "invalid_request");
    }
}
