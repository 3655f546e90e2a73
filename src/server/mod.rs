//! Server Module
//!
//! TCP front end: the accept loop and the per-connection handler.

mod connection;
mod listener;

pub use connection::{dispatch, handle_connection, Dispatch};
pub use listener::{run, serve};
