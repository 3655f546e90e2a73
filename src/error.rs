//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Invalid cache capacity {0}: must be greater than zero")]
    InvalidCapacity(usize),
}

// == Server Error Enum ==
/// Errors that stop the listener.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listen address could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The listen address could not be resolved
    #[error("Invalid listen address {0}")]
    Address(String),

    /// Listener-level I/O failure
    #[error("Listener I/O error: {0}")]
    Io(#[from] io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
