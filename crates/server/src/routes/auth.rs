//! Signup and login routes.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::AuthService;
use crate::state::AppState;

/// Request body for signup and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response for a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub ok: bool,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    /// The canonical username as stored at signup.
    pub user: String,
}

/// Create an account.
///
/// `POST /auth/signup`
///
/// # Errors
///
/// Returns `AppError::Validation` for an invalid username or short
/// password, `AppError::Conflict` if the username is taken, and
/// `AppError::Store` on storage failure.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SignupResponse>> {
    AuthService::new(state.store())
        .signup(&request.username, &request.password)
        .await?;

    Ok(Json(SignupResponse { ok: true }))
}

/// Verify credentials.
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown username,
/// `AppError::Unauthorized` on password mismatch, and `AppError::Store` on
/// storage failure.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>> {
    let user = AuthService::new(state.store())
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse { ok: true, user }))
}
