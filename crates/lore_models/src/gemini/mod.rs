//! Google Gemini REST API client.
//!
//! The client supports:
//! - Structured output through `responseMimeType` + `responseSchema`
//! - System instructions
//! - Automatic retry of transient failures with exponential backoff

mod client;
mod dto;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub(crate) type GeminiResult<T> = Result<T, lore_error::GenerationError>;
