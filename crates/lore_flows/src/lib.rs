//! Generation flows for Lore Explorer.
//!
//! A flow turns a [`LocationQuery`](lore_core::LocationQuery) into a prompt,
//! sends it to a [`LoreDriver`](lore_interface::LoreDriver) together with a
//! declared output shape, and parses the structured answer:
//!
//! - [`StoryGenerator`]: location → [`Story`](lore_core::Story)
//! - [`LocationSummarizer`]: location → visitor-oriented summary
//!
//! Both go through [`invoke_structured`], which bounds the call with the
//! configured timeout and validates that every declared field came back
//! non-empty. Any failure surfaces as a
//! [`GenerationError`](lore_error::GenerationError).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod prompts;
mod story;
mod structured;
mod summary;

pub use extraction::extract_json;
pub use prompts::{story_prompt, summary_prompt};
pub use story::StoryGenerator;
pub use structured::invoke_structured;
pub use summary::LocationSummarizer;
