//! Signup and login against the users document.

use chrono::Utc;

use quorum_core::{Username, password_digest};

use crate::error::{AppError, Result};
use crate::models::User;
use crate::store::{DocumentStore, keys};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication operations.
///
/// There are no sessions or tokens: signup appends a user record, login is
/// a stateless digest comparison returning the canonical username.
pub struct AuthService<'a> {
    store: &'a DocumentStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the username pattern or password
    /// length check fails, `AppError::Conflict` if the username is already
    /// taken (case-insensitively), and `AppError::Store` on persistence
    /// failure.
    pub async fn signup(&self, username: &str, password: &str) -> Result<()> {
        let username =
            Username::parse(username).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_password(password)?;

        let mut users: Vec<User> = self.store.load(keys::USERS).await?;
        if users.iter().any(|u| username.matches(&u.username)) {
            return Err(AppError::Conflict("username already taken".to_string()));
        }

        users.push(User {
            username: username.into_inner(),
            password_hash: password_digest(password),
            created_at: Utc::now(),
        });
        self.store.save(keys::USERS, &users).await?;

        Ok(())
    }

    /// Verify credentials and return the canonical stored username.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown username,
    /// `AppError::Unauthorized` on digest mismatch, and `AppError::Store`
    /// on load failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let users: Vec<User> = self.store.load(keys::USERS).await?;
        let user = users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username.trim()))
            .ok_or_else(|| AppError::NotFound("unknown username".to_string()))?;

        if password_digest(password) != user.password_hash {
            return Err(AppError::Unauthorized("invalid credentials".to_string()));
        }

        Ok(user.username.clone())
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
