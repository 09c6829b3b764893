//! Health endpoint tests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;

use quorum_integration_tests::{TestApp, expect_json};

#[tokio::test]
async fn test_healthz_reports_storage_mode() {
    let app = TestApp::new();

    let body = expect_json(app.get("/healthz").await, StatusCode::OK).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["storage"], "local");
    assert!(body["time"].as_str().unwrap().starts_with("20"));
}

#[tokio::test]
async fn test_unmatched_path_is_404_without_static_root() {
    let app = TestApp::new();

    let response = app.get("/definitely/not/a/route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
