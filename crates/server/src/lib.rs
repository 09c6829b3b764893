//! Quorum server library.
//!
//! This crate provides the forum backend as a library, allowing the
//! assembled router to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
