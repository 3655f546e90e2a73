//! Command Parser
//!
//! Turns one protocol line into a [`Command`]. No I/O happens here.

use thiserror::Error;

/// A parsed client command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `GET <key>`
    Get { key: String },
    /// `PUT <key> <value>`; the value is everything after the key
    Put { key: String, value: String },
    /// `INVALIDATE <key>`
    Invalidate { key: String },
    /// `QUIT`
    Quit,
}

impl Command {
    /// Upper-case command name as written on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Get { .. } => "GET",
            Command::Put { .. } => "PUT",
            Command::Invalidate { .. } => "INVALIDATE",
            Command::Quit => "QUIT",
        }
    }
}

/// Why a line could not be turned into a [`Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Known command name with the wrong number of arguments
    #[error("Invalid argument count. Expected {expected}. Found: {found}")]
    InvalidArgumentCount { expected: usize, found: usize },

    /// Command name not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Maximum number of space-separated pieces; the last one keeps its spaces.
const MAX_TOKENS: usize = 3;

/// Parses a single line, with or without its `\n` / `\r\n` terminator.
///
/// The line is split on single spaces into at most three pieces: name, key
/// and the remainder. The name is matched case-insensitively. Argument count
/// is the number of pieces after the name, so it never exceeds two.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = strip_terminator(line);
    let mut tokens = line.splitn(MAX_TOKENS, ' ');

    let name = tokens.next().unwrap_or_default().trim().to_ascii_uppercase();
    let args: Vec<&str> = tokens.collect();

    let expected = match name.as_str() {
        "GET" | "INVALIDATE" => 1,
        "PUT" => 2,
        "QUIT" => 0,
        _ => return Err(ParseError::UnknownCommand(name)),
    };

    if args.len() != expected {
        return Err(ParseError::InvalidArgumentCount {
            expected,
            found: args.len(),
        });
    }

    let command = match (name.as_str(), args.as_slice()) {
        ("GET", [key]) => Command::Get {
            key: key.to_string(),
        },
        ("INVALIDATE", [key]) => Command::Invalidate {
            key: key.to_string(),
        },
        ("PUT", [key, value]) => Command::Put {
            key: key.to_string(),
            value: value.to_string(),
        },
        _ => Command::Quit,
    };

    Ok(command)
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
