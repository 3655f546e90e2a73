//! Connection Handler
//!
//! Drives one client connection: read a line, run it against the cache,
//! write the reply, repeat until QUIT, EOF or an I/O error.

use std::io;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, trace};

use crate::cache::SharedCache;
use crate::protocol::{self, Command, ParseError, Response};

/// What the connection should do after a line has been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep reading; write the reply first if there is one
    Continue(Option<Response>),
    /// Close the connection without replying
    Close,
}

/// Serves a single client until it quits or disconnects.
///
/// Each command completes, including its reply, before the next line is
/// read. A read or write failure ends only this connection. With
/// `idle_timeout` set, a connection that sends no complete line within it
/// is closed.
pub async fn handle_connection<S>(
    stream: S,
    cache: SharedCache,
    idle_timeout: Option<Duration>,
) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();

        let read = reader.read_until(b'\n', &mut buf);
        let n = match idle_timeout {
            Some(limit) => match tokio::time::timeout(limit, read).await {
                Ok(result) => result?,
                Err(_) => {
                    debug!(timeout_secs = limit.as_secs_f64(), "Closing idle connection");
                    return Ok(());
                }
            },
            None => read.await?,
        };

        // EOF, possibly in the middle of an unterminated line
        if n == 0 || buf.last() != Some(&b'\n') {
            trace!("Connection closed by client");
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        match dispatch(&line, &cache).await {
            Dispatch::Close => {
                debug!("Client sent QUIT");
                return Ok(());
            }
            Dispatch::Continue(Some(response)) => {
                writer.write_all(response.to_line().as_bytes()).await?;
                writer.flush().await?;
            }
            Dispatch::Continue(None) => {}
        }
    }
}

/// Parses one line and applies it to the cache.
pub async fn dispatch(line: &str, cache: &SharedCache) -> Dispatch {
    let command = match protocol::parse(line) {
        Ok(command) => command,
        Err(err) => {
            match &err {
                ParseError::UnknownCommand(name) => debug!(command = %name, "Ignoring unknown command"),
                ParseError::InvalidArgumentCount { .. } => debug!(error = %err, "Rejected command"),
            }
            return Dispatch::Continue(Response::from_parse_error(&err));
        }
    };

    trace!(command = command.name(), "Processing command");

    match command {
        Command::Get { key } => {
            let response = match cache.get(&key).await {
                Some(value) => Response::Value(value),
                None => Response::NotFound,
            };
            Dispatch::Continue(Some(response))
        }
        Command::Put { key, value } => {
            cache.put(key, value).await;
            Dispatch::Continue(None)
        }
        Command::Invalidate { key } => {
            cache.invalidate(&key).await;
            Dispatch::Continue(None)
        }
        Command::Quit => Dispatch::Close,
    }
}
