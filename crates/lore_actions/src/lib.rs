//! The Lore Explorer workflow.
//!
//! [`Actions`] implements the two user actions, generate story and save
//! location, on top of the flows and the location store. [`Explorer`] adds
//! the per-session state every presentation shares: the loaded list of
//! saved locations, the current story, and one in-flight [`Slot`] per action.
//!
//! Every action returns an [`ActionOutcome`]; nothing here returns an error
//! or panics on collaborator failure.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actions;
mod explorer;
mod notification;
mod outcome;
mod slot;

pub use actions::Actions;
pub use explorer::{Explorer, SaveResult};
pub use notification::{Notification, NotificationLevel};
pub use outcome::{ActionOutcome, FailureKind, messages};
pub use slot::{Slot, SlotGuard};
