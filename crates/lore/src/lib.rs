//! Lore Explorer: stories about places, told by a generative model.
//!
//! Name a location (or hand over device coordinates) and get back a titled,
//! multi-paragraph story about its history and legends. Locations worth
//! keeping are saved with a short visitor-oriented summary and listed most
//! recent first.
//!
//! # Quick Start
//!
//! ```no_run
//! use lore::{LoreConfig, build_explorer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LoreConfig::load()?;
//! let explorer = build_explorer(&config).await?;
//! explorer.load().await;
//!
//! if let Some(story) = explorer.generate("Eiffel Tower, Paris").await.success() {
//!     println!("{}\n\n{}", story.title, story.story);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `lore_error` - Error types
//! - `lore_core` - Data model, generation request types, configuration
//! - `lore_interface` - `LoreDriver` and `LocationRepository` traits
//! - `lore_models` - Gemini driver
//! - `lore_flows` - Story Generator and Location Summarizer
//! - `lore_database` - Location store (PostgreSQL, in-memory)
//! - `lore_actions` - Workflow actions and the explorer session
//! - `lore_server` - HTTP JSON API
//!
//! This crate re-exports the public surface of each and wires them together.
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry bridge for tracing spans
//! - `api` - enable tests that call the live Gemini API

mod app;

pub use app::{build_driver, build_explorer, build_explorer_with};

pub use lore_actions::*;
pub use lore_core::*;
pub use lore_database::{InMemoryLocationRepository, LocationStore, PostgresLocationRepository};
pub use lore_error::*;
pub use lore_flows::{LocationSummarizer, StoryGenerator, extract_json, invoke_structured};
pub use lore_interface::*;
pub use lore_models::GeminiClient;
pub use lore_server::{create_router, serve};

// OpenTelemetry observability module
#[cfg(feature = "observability")]
pub mod observability;
