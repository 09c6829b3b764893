//! Shared newtype wrappers.
//!
//! - [`id`] - Type-safe entity identifiers with prefixed generation
//! - [`username`] - Validated usernames with case-insensitive comparison
//! - [`credential`] - Password digest helpers

pub mod credential;
pub mod id;
pub mod username;

pub use credential::password_digest;
pub use id::{AnswerId, QuestionId};
pub use username::{Username, UsernameError};
