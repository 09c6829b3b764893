//! Health check route.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Server time at the moment of the check.
    pub time: DateTime<Utc>,
    /// Configured storage mode: `local`, `object`, or `fallback`.
    pub storage: &'static str,
}

/// Liveness check reporting the configured storage mode.
///
/// `GET /healthz`. Does not touch the document store.
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: Utc::now(),
        storage: state.config().storage.mode_name(),
    })
}
