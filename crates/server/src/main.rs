//! Quorum Server - question-and-answer forum backend.
//!
//! # Architecture
//!
//! - Axum web framework serving a small JSON REST surface
//! - Whole-document JSON persistence: each collection is one flat array,
//!   read and rewritten on every mutation
//! - Storage backed by an HTTP object store, the local filesystem, or the
//!   former with per-request fallback to the latter
//! - Optional static asset serving for a prebuilt front-end
//!
//! There is deliberately no concurrency control across requests: concurrent
//! writers to the same collection race read-modify-write, and the last
//! writer wins.

#![cfg_attr(not(test), forbid(unsafe_code))]

use quorum_server::config::Config;
use quorum_server::routes;
use quorum_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment; a missing storage target is a
    // fatal startup condition
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quorum_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        storage = config.storage.mode_name(),
        "storage backend selected"
    );

    // Build application state and router
    let state = AppState::new(config.clone());
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("quorum-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
