//! Core data types for Lore Explorer.
//!
//! This crate provides the data model shared by every layer of the workflow
//! (locations, stories, saved records), the provider-neutral generation
//! request/response types, and the startup configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod location;
mod message;
mod request;
mod role;
mod saved;
mod shape;
mod story;

pub use config::{GenerationConfig, LoreConfig, ServerConfig, StoreBackend, StoreConfig};
pub use location::{Coordinates, LocationQuery};
pub use message::Message;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Output};
pub use role::Role;
pub use saved::SavedLocation;
pub use shape::{OutputShape, ShapeField};
pub use story::{LocationSummary, Story};
