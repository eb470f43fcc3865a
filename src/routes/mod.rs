//! HTTP route handlers.
//!
//! Two route groups: the clock endpoint at `/` and the liveness endpoint at
//! `/healthz`. Both serve a fresh JSON body per request and carry a
//! `Cache-Control: no-store` header so neither is ever answered from an
//! intermediary cache. Unknown paths fall through to axum's default 404.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod time;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_DYNAMIC;
use crate::middleware::request_id_layer;

/// Creates the Axum router with both endpoints and cache headers.
pub fn create_router() -> Router {
    // Clock and liveness - always fresh, never cached
    let dynamic_routes = Router::new()
        .route("/", get(time::now))
        .route("/healthz", get(health::healthz))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DYNAMIC),
        ));

    Router::new()
        .merge(dynamic_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
