//! HTTP JSON API for Lore Explorer.
//!
//! One [`Explorer`](lore_actions::Explorer) session backs every request, so
//! concurrent generations (or saves) are rejected with `409 Conflict` while
//! one is in flight. Failures are `{"error": message}` bodies:
//!
//! | failure            | status |
//! |--------------------|--------|
//! | validation         | 400    |
//! | busy               | 409    |
//! | generation         | 502    |
//! | store unavailable  | 503    |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod dto;
mod server;

pub use api::{ApiState, create_router, status_for};
pub use dto::{CoordinatesBody, ErrorBody, LocationBody, SaveResponse, StoryResponse};
pub use server::serve;
