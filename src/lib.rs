//! Clocktower: a minimal HTTP time and liveness service.
//!
//! Exposes two JSON endpoints: `GET /` returning the current server-local
//! wall-clock time and `GET /healthz` returning a constant liveness payload.
//! Both handlers are stateless; unknown paths fall through to the framework
//! default 404.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
