//! User records for the optional signup/login subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user account.
///
/// The username is stored with its original casing (the canonical form);
/// uniqueness and lookup are case-insensitive. The password digest is an
/// unsalted SHA-256 hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
