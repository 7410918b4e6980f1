//! Explicit results of user actions.

use serde::{Deserialize, Serialize};

/// User-facing messages.
pub mod messages {
    /// Generate requested with empty input.
    pub const EMPTY_LOCATION: &str = "Please provide a location.";
    /// Story generation failed for any reason.
    pub const GENERATION_FAILED: &str = "Failed to generate story. Please try again.";
    /// Save requested with empty input.
    pub const INVALID_SAVE: &str = "Invalid location to save.";
    /// Summarizing or storing failed for any reason.
    pub const SAVE_FAILED: &str =
        "Failed to save location. Please make sure the location store is configured correctly.";
    /// A generation is already in flight.
    pub const GENERATION_BUSY: &str = "A story is already being generated. Please wait.";
    /// A save is already in flight.
    pub const SAVE_BUSY: &str = "A save is already in progress. Please wait.";
}

/// Why an action failed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input rejected before any external call
    #[display("validation")]
    Validation,
    /// The generation service failed, timed out or returned unusable output
    #[display("generation")]
    Generation,
    /// The location store is unconfigured or refused the write
    #[display("store_unavailable")]
    StoreUnavailable,
    /// The same kind of action is already in flight
    #[display("busy")]
    Busy,
}

/// Result of an action: the value, or a kind plus a message fit for the user.
///
/// Failure messages never carry internal detail; that goes to the log.
///
/// # Examples
///
/// ```
/// use lore_actions::{ActionOutcome, FailureKind};
///
/// let outcome: ActionOutcome<u32> = ActionOutcome::failure(FailureKind::Busy, "Please wait.");
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.failure_kind(), Some(FailureKind::Busy));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    /// The action completed
    Success(T),
    /// The action failed
    Failure {
        /// Failure category
        kind: FailureKind,
        /// User-displayable message
        message: String,
    },
}

impl<T> ActionOutcome<T> {
    /// A failed outcome.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// True for [`ActionOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure kind, if failed.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// The failure message, if failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// The success value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Transform the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionOutcome<U> {
        match self {
            Self::Success(value) => ActionOutcome::Success(f(value)),
            Self::Failure { kind, message } => ActionOutcome::Failure { kind, message },
        }
    }

    /// Convert into a `Result` with the `(kind, message)` pair as the error.
    pub fn into_result(self) -> Result<T, (FailureKind, String)> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure { kind, message } => Err((kind, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_failure() {
        let outcome: ActionOutcome<u32> =
            ActionOutcome::failure(FailureKind::Generation, messages::GENERATION_FAILED);
        let mapped = outcome.map(|n| n + 1);
        assert_eq!(mapped.failure_kind(), Some(FailureKind::Generation));
        assert_eq!(mapped.message(), Some(messages::GENERATION_FAILED));
    }

    #[test]
    fn failure_kind_renders_snake_case() {
        assert_eq!(FailureKind::StoreUnavailable.to_string(), "store_unavailable");
    }
}
