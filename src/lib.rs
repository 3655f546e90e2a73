//! Microcache - A lightweight in-memory cache server
//!
//! Clients speak a newline-delimited text protocol over TCP to store,
//! fetch and invalidate string values in a bounded LRU cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;

pub use cache::{CacheStore, SharedCache};
pub use config::Config;
pub use server::{run, serve};
