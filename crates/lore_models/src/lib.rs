//! Generation service integrations for Lore Explorer.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) through the `generateContent` REST endpoint
//!
//! # Example
//!
//! ```no_run
//! use lore_core::{GenerateRequest, GenerationConfig, Message};
//! use lore_interface::LoreDriver;
//! use lore_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(&GenerationConfig::default().with_api_key("key"))?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

mod gemini;
mod metrics;

pub use gemini::GeminiClient;
pub use metrics::{LlmMetrics, classify_error};
