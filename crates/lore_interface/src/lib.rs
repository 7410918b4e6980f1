//! Trait definitions for Lore Explorer.
//!
//! The workflow talks to two external collaborators, each through a narrow
//! trait defined here:
//! - [`LoreDriver`]: the generation service
//! - [`LocationRepository`]: the document store holding saved locations

mod traits;

pub use traits::{LocationRepository, LoreDriver};
