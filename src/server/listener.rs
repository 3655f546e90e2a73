//! Listener / Acceptor
//!
//! Binds the listen address and spawns one task per accepted connection,
//! all sharing the same cache.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{debug, error, info};

use super::connection::handle_connection;
use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::ServerError;

/// Binds the configured address and serves until `shutdown` resolves.
///
/// Failing to bind is returned as [`ServerError::Bind`] and never retried.
pub async fn run<F>(config: &Config, cache: SharedCache, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(address = %listener.local_addr()?, "Server listening");

    serve(listener, cache, config.idle_timeout(), shutdown).await
}

/// Accepts connections on an already bound listener until `shutdown`
/// resolves.
///
/// The loop only accepts and spawns; it never waits on connection work.
/// A failed accept is logged and the loop keeps going.
pub async fn serve<F>(
    listener: TcpListener,
    cache: SharedCache,
    idle_timeout: Option<Duration>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Listener stopping");
                return Ok(());
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    info!(peer = %peer, "Client connected");
                    let cache = cache.clone();

                    tokio::spawn(async move {
                        match handle_connection(stream, cache, idle_timeout).await {
                            Ok(()) => info!(peer = %peer, "Client disconnected"),
                            Err(e) => debug!(peer = %peer, error = %e, "Connection error"),
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
