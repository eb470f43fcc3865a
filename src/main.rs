//! Clocktower: a minimal time and liveness HTTP service.
//!
//! This is the application entry point. It initializes tracing, resolves
//! listener settings from command line arguments, sets up the Axum router
//! with both routes, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clocktower::config::{
    ServerConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT, DEFAULT_PORT,
};
use clocktower::http::server::start_server;
use clocktower::routes::create_router;

/// Clocktower: current-time and liveness endpoints over HTTP
#[derive(Parser, Debug)]
#[command(name = "clocktower", version, about)]
struct Args {
    /// Address to bind the listener to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level filter (e.g., "clocktower=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format: "text" or "json"
    #[arg(long, default_value = DEFAULT_LOG_FORMAT)]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if args.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    tracing::info!(host = %config.host, port = config.port, "Loaded listener configuration");

    // Create router
    let app = create_router();

    // Start server; blocks until shutdown
    start_server(app, &config).await?;

    Ok(())
}
