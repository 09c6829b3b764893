//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /healthz                    - Health check (reports storage mode)
//!
//! # Questions
//! GET  /questions                  - List questions with answer counts, newest first
//! GET  /search                     - Alias of the listing; query params ignored
//! POST /questions                  - Create question ({title, body}, optional X-User)
//! GET  /questions/{qid}            - Question detail with embedded answers
//! GET  /questions/{qid}/answers    - Answers for one question
//! POST /questions/{qid}/answers    - Create answer ({body}, optional X-User)
//!
//! # Answers
//! GET  /answers                    - All answers, optionally filtered by
//!                                    questionId/qid/question_id
//!
//! # Auth
//! POST /auth/signup                - Create account ({username, password})
//! POST /auth/login                 - Verify credentials
//! ```
//!
//! Any unmatched path falls through to the static asset service when a
//! static root is configured, with an index fallback for client-side
//! routing.

pub mod answers;
pub mod auth;
pub mod health;
pub mod questions;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the question routes router.
///
/// The `no-store` cache directive applies to listing/detail reads only;
/// creation responses are left unmarked.
pub fn question_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list)
                .layer(no_store_header())
                .post(questions::create),
        )
        .route("/{qid}", get(questions::show).layer(no_store_header()))
        .route(
            "/{qid}/answers",
            get(questions::list_answers)
                .layer(no_store_header())
                .post(questions::create_answer),
        )
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}

/// Create the full application router.
///
/// The static asset service is mounted as the fallback only when a static
/// root is configured.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(health::healthz))
        .nest("/questions", question_routes())
        .route("/search", get(questions::list).layer(no_store_header()))
        .route("/answers", get(answers::list))
        .nest("/auth", auth_routes());

    if let Some(root) = state.config().static_root.clone() {
        let index = root.join("index.html");
        router = router.fallback_service(ServeDir::new(root).not_found_service(ServeFile::new(index)));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// `Cache-Control: no-store` on every response that passes through.
fn no_store_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
}
