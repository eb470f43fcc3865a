//! Startup configuration and constants.
//!
//! Defines the default bind address, the wall-clock time format, logging
//! defaults, and Cache-Control values. `ServerConfig` carries the listener
//! settings resolved from command line arguments at startup.

use std::net::SocketAddr;

/// Default listen address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Wall-clock format for the time endpoint: zero-padded two-digit day,
/// month, hour, minute and second, four-digit year, 24-hour clock
/// (e.g. "05/03/2026, 09:41:07")
pub const TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "clocktower=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Cache-Control for the dynamic endpoints. Liveness probes and clock reads
/// must never be answered from an intermediary cache.
pub const CACHE_CONTROL_DYNAMIC: &str = "no-store";

/// HTTP listener configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the configured host and port into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address {host}:{port}")]
    InvalidBindAddr { host: String, port: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_resolves_to_wildcard_8000() {
        let addr = ServerConfig::default().bind_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn custom_host_and_port_resolve() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn hostname_is_rejected() {
        // SocketAddr parsing accepts IP literals only
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 8000,
        };
        assert!(matches!(
            config.bind_addr(),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
    }
}
