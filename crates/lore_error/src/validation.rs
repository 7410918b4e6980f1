//! Input validation errors.

/// Rejected user input, raised before any external call is made.
///
/// The message is meant for the user and is shown verbatim.
///
/// # Examples
///
/// ```
/// use lore_error::ValidationError;
///
/// let err = ValidationError::new("Please provide a location.");
/// assert_eq!(err.message, "Please provide a location.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// User-facing message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
