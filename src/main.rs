//! Microcache - A lightweight in-memory cache server
//!
//! Serves a newline-delimited text protocol over TCP on top of a bounded
//! LRU cache.

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use microcache::{server, Config, SharedCache};

/// Main entry point for the Microcache server.
///
/// # Startup Sequence
/// 1. Parse configuration from flags and environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Create the shared cache with the configured capacity
/// 4. Bind the listener and serve until SIGINT/SIGTERM
/// 5. Log final cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // RUST_LOG wins over --log-level when set
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("microcache={}", config.log_level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        port = config.port,
        host = %config.host,
        capacity = config.capacity,
        idle_timeout = ?config.idle_timeout(),
        "Starting microcache"
    );

    let cache = SharedCache::with_capacity(config.capacity)
        .context("Failed to create cache store")?;
    info!("Cache store initialized");

    server::run(&config, cache.clone(), shutdown_signal())
        .await
        .context("Error starting server")?;

    info!(stats = %cache.stats().await, "Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
