//! Liveness endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify
//! the service is alive.

use axum::Json;
use serde::Serialize;

/// Response body for `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness handler.
///
/// This is a liveness probe - it only checks that the process can respond
/// to HTTP, so the payload is a constant.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "up" })
}
