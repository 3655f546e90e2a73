//! Configuration Module
//!
//! Server configuration from command-line flags, with environment variable
//! fallbacks and sensible defaults.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::ServerError;

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 6542;

/// Server configuration parameters.
///
/// Each flag can also be supplied through the environment variable named
/// in its `env` attribute; flags take precedence.
#[derive(Parser, Debug, Clone)]
#[command(name = "microcache")]
#[command(version, about = "In-memory key-value cache server", long_about = None)]
pub struct Config {
    /// Port to bind to
    #[arg(short, long, env = "MICROCACHE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "MICROCACHE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Maximum number of entries the cache can hold
    #[arg(short, long, env = "MICROCACHE_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Close connections idle for this many seconds (disabled when unset)
    #[arg(long, env = "MICROCACHE_IDLE_TIMEOUT")]
    pub idle_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Resolves `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ServerError::Address(addr))
    }

    /// Idle watchdog duration, if enabled. Zero disables it.
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            capacity: DEFAULT_CAPACITY,
            idle_timeout: None,
            log_level: "info".to_string(),
        }
    }
}
