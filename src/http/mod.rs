//! HTTP server startup and shutdown handling.

pub mod server;
pub mod shutdown;
