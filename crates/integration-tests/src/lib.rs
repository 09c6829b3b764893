//! Integration tests for Quorum.
//!
//! Tests drive the assembled router in-process through
//! `tower::ServiceExt::oneshot`; no socket is bound and no external service
//! is required. Each test gets its own temporary data directory behind a
//! filesystem-backed document store.
//!
//! # Test Categories
//!
//! - `forum_flow` - Question/answer lifecycle and listing properties
//! - `auth_flow` - Signup and login
//! - `health` - Health check and storage mode reporting

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use quorum_server::config::{Config, StorageConfig};
use quorum_server::routes;
use quorum_server::state::AppState;

/// An in-process application over a fresh temporary data directory.
pub struct TestApp {
    router: Router,
    // Held so the data directory outlives the test
    _data_dir: TempDir,
}

impl TestApp {
    /// Build an app backed by a new tempdir-rooted filesystem store.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("create tempdir");
        let config = Config {
            host: "127.0.0.1".parse().expect("loopback addr"),
            port: 0,
            storage: StorageConfig::Local {
                data_dir: data_dir.path().to_path_buf(),
            },
            static_root: None,
        };

        Self {
            router: routes::app(AppState::new(config)),
            _data_dir: data_dir,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> Response {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("build request");
        self.router.clone().oneshot(request).await.expect("route")
    }

    /// Send a POST request with a JSON body and no identity header.
    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.post_json_as_opt(path, body, None).await
    }

    /// Send a POST request with a JSON body and an `X-User` header.
    pub async fn post_json_as(&self, path: &str, body: &Value, user: &str) -> Response {
        self.post_json_as_opt(path, body, Some(user)).await
    }

    async fn post_json_as_opt(&self, path: &str, body: &Value, user: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(user) = user {
            builder = builder.header("X-User", user);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.router.clone().oneshot(request).await.expect("route")
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Assert a status and return the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
