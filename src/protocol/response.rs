//! Response lines written back to clients.

use std::fmt;

use super::ParseError;

/// Reply to a single command. Commands that succeed silently have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Value found by GET
    Value(String),
    /// GET on an absent key
    NotFound,
    /// Recognised command with the wrong number of arguments
    InvalidArgumentCount { expected: usize, found: usize },
}

impl Response {
    /// Maps a parse failure to the reply the client sees, if any.
    ///
    /// Unknown commands are ignored without a reply.
    pub fn from_parse_error(err: &ParseError) -> Option<Self> {
        match *err {
            ParseError::InvalidArgumentCount { expected, found } => {
                Some(Response::InvalidArgumentCount { expected, found })
            }
            ParseError::UnknownCommand(_) => None,
        }
    }

    /// Full wire line including the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Value(value) => f.write_str(value),
            Response::NotFound => f.write_str("Key not found"),
            Response::InvalidArgumentCount { expected, found } => write!(
                f,
                "Invalid argument count. Expected {}. Found: {}",
                expected, found
            ),
        }
    }
}
