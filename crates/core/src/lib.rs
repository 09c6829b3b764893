//! Quorum Core - Shared types library.
//!
//! This crate provides common types used across all Quorum components:
//! - `server` - The forum HTTP backend
//! - `integration-tests` - End-to-end tests against the assembled router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for entity identifiers, usernames, and
//!   password digests

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
