//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message sent to the generation service.
///
/// # Examples
///
/// ```
/// use lore_core::Role;
///
/// assert_ne!(Role::User, Role::System);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the prompt
    User,
    /// Assistant messages are from the model
    Assistant,
}
