//! Error types for Lore Explorer.
//!
//! This crate provides the error types shared by every crate in the workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The four conditions the workflow distinguishes map onto these types:
//!
//! | condition            | type                                   |
//! |----------------------|----------------------------------------|
//! | empty input          | [`ValidationError`]                    |
//! | model call failed    | [`GenerationError`]                    |
//! | write not possible   | [`StoreError`] (any kind on the write path) |
//! | read not possible    | [`StoreError`], swallowed by the store |
//!
//! # Examples
//!
//! ```
//! use lore_error::{LoreResult, ValidationError};
//!
//! fn check(location: &str) -> LoreResult<()> {
//!     if location.is_empty() {
//!         Err(ValidationError::new("Please provide a location."))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("Kyoto").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod generation;
mod server;
mod store;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{LoreError, LoreErrorKind, LoreResult};
pub use generation::{GenerationError, GenerationErrorKind, RetryableError};
pub use server::{ServerError, ServerErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use validation::ValidationError;
