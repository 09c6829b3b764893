//! Password digest helpers.
//!
//! Credentials are verified by comparing a stored one-way digest against the
//! digest of the supplied password. The digest is unsalted SHA-256 encoded as
//! lowercase hex; two accounts with the same password share a digest. This
//! matches the wire contract of the `users` document and is an accepted
//! limitation of the auth subsystem (no sessions, no tokens).

use sha2::{Digest, Sha256};

/// Compute the one-way digest of a password.
///
/// ```
/// use quorum_core::password_digest;
///
/// let digest = password_digest("hunter22");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, password_digest("hunter22"));
/// ```
#[must_use]
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
