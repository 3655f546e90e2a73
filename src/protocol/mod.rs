//! Protocol Module
//!
//! Newline-delimited text protocol spoken over each connection.
//!
//! # Commands
//! - `GET <key>` - replies with the value, or `Key not found`
//! - `PUT <key> <value>` - stores the value, no reply
//! - `INVALIDATE <key>` - removes the key, no reply
//! - `QUIT` - closes the connection, no reply
//!
//! A known command with the wrong number of arguments replies
//! `Invalid argument count. Expected <N>. Found: <M>`. Unknown commands get
//! no reply.

mod command;
mod response;

pub use command::{parse, Command, ParseError};
pub use response::Response;
