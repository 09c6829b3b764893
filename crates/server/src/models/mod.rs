//! Persisted record types.
//!
//! Each collection is a flat JSON array of these records; field names are
//! camelCase on the wire and on disk. Lifecycle is create-only: no record is
//! ever updated or deleted.

pub mod answer;
pub mod question;
pub mod user;

pub use answer::Answer;
pub use question::{Question, QuestionDetail, QuestionSummary};
pub use user::User;
