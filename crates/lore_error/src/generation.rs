//! Generation-service error types and retry classification.

/// Conditions under which a call to the generation service fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in configuration or environment
    #[display("GEMINI_API_KEY not set and no generation.api_key configured")]
    MissingApiKey,
    /// Failed to construct the HTTP client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// Transport-level failure (DNS, connection reset, TLS)
    #[display("Generation request failed: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The model returned no candidate text
    #[display("Model returned an empty response")]
    EmptyResponse,
    /// The model refused or was stopped by a safety filter
    #[display("Response blocked: {}", _0)]
    Blocked(String),
    /// The response text did not match the declared output shape
    #[display("Malformed model output: {}", _0)]
    MalformedOutput(String),
    /// The call did not finish within the configured timeout
    #[display("Generation timed out after {}s", _0)]
    Timeout(u64),
}

impl GenerationErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GenerationErrorKind::Transport(_) => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            GenerationErrorKind::HttpError { status_code, .. } => match *status_code {
                429 => (5000, 3, 40),
                503 => (2000, 5, 60),
                500 | 502 | 504 => (1000, 3, 8),
                408 => (2000, 4, 30),
                _ => (2000, 5, 60),
            },
            GenerationErrorKind::Transport(_) => (1000, 3, 10),
            _ => (2000, 5, 60),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use lore_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use lore_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// let (backoff, retries, _max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 2000);
/// assert_eq!(retries, 5);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503, 429 or dropped connections return true.
    /// Permanent errors like 401 or 400 return false.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_overload_are_retryable() {
        for status_code in [408, 429, 500, 502, 503, 504] {
            let kind = GenerationErrorKind::HttpError {
                status_code,
                message: String::new(),
            };
            assert!(kind.is_retryable(), "{status_code} should retry");
        }
    }

    #[test]
    fn auth_and_bad_request_are_permanent() {
        for status_code in [400, 401, 403, 404] {
            let kind = GenerationErrorKind::HttpError {
                status_code,
                message: String::new(),
            };
            assert!(!kind.is_retryable(), "{status_code} should not retry");
        }
        assert!(!GenerationErrorKind::MalformedOutput("x".into()).is_retryable());
        assert!(!GenerationErrorKind::Timeout(60).is_retryable());
    }

    #[test]
    fn rate_limit_backs_off_longer() {
        let rate_limited = GenerationErrorKind::HttpError {
            status_code: 429,
            message: String::new(),
        };
        let server_error = GenerationErrorKind::HttpError {
            status_code: 500,
            message: String::new(),
        };
        assert!(rate_limited.retry_strategy_params().0 > server_error.retry_strategy_params().0);
    }
}
