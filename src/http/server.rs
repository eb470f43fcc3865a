//! HTTP server startup logic.
//!
//! Binds the listener immediately with no pre-flight checks. A bind failure
//! (port already in use, bad address) surfaces as a `ServerError` that
//! terminates the process with a diagnostic and non-zero exit status.

use axum::Router;

use crate::config::{ConfigError, ServerConfig};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr()?;

    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
