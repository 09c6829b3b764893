//! Domain operations over the document store.
//!
//! Every operation is a full-document read, an in-memory list mutation, and
//! a full-document rewrite. There is no cross-request locking; concurrent
//! writers to the same collection race read-modify-write and the last
//! writer wins.

pub mod auth;
pub mod forum;

pub use auth::AuthService;
pub use forum::ForumService;
