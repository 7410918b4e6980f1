//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GenerationError, ServerError, StoreError, ValidationError,
};

/// Every error the workspace can produce.
///
/// # Examples
///
/// ```
/// use lore_error::{LoreError, LoreErrorKind, ValidationError};
///
/// let err: LoreError = ValidationError::new("Please provide a location.").into();
/// assert!(matches!(err.kind(), LoreErrorKind::Validation(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LoreErrorKind {
    /// Rejected input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generation service failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Location store failure
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// HTTP front end error
    #[from(ServerError)]
    Server(ServerError),
}

/// Lore error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lore_error::{ConfigError, LoreResult};
///
/// fn might_fail() -> LoreResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lore Error: {}", _0)]
pub struct LoreError(Box<LoreErrorKind>);

impl LoreError {
    /// Create a new error from a kind.
    pub fn new(kind: LoreErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LoreErrorKind {
        &self.0
    }

    /// The generation failure carried by this error, if any.
    pub fn as_generation(&self) -> Option<&GenerationError> {
        match self.kind() {
            LoreErrorKind::Generation(err) => Some(err),
            _ => None,
        }
    }

    /// The store failure carried by this error, if any.
    pub fn as_store(&self) -> Option<&StoreError> {
        match self.kind() {
            LoreErrorKind::Store(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to LoreErrorKind
impl<T> From<T> for LoreError
where
    T: Into<LoreErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lore operations.
pub type LoreResult<T> = std::result::Result<T, LoreError>;
