//! Crate-level error type returned by [`crate::Database::interpret`].

use crate::commands::ExecuteError;
use crate::compute::ParseError;
use crate::storage::EngineError;
use thiserror::Error;

/// Coarse classification of a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: bad character, empty line, too many arguments
    Lexical,
    /// Unknown verb or wrong number of arguments
    Grammar,
    /// The key or pattern matched nothing
    NotFound,
    /// The wildcard pattern could not be compiled
    Pattern,
}

/// Error returned when interpreting a line fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse request: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to execute request: {0}")]
    Execute(#[from] ExecuteError),
}

impl Error {
    /// Classifies the error so callers can branch without matching the chain.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(ParseError::Lex(_)) => ErrorKind::Lexical,
            Error::Parse(ParseError::Grammar(_)) => ErrorKind::Grammar,
            Error::Execute(ExecuteError::Grammar(_)) => ErrorKind::Grammar,
            Error::Execute(ExecuteError::Engine { source, .. }) => match source {
                EngineError::NotFound { .. } | EngineError::NoMatch { .. } => {
                    ErrorKind::NotFound
                }
                EngineError::Pattern(_) => ErrorKind::Pattern,
            },
        }
    }

    /// Returns `true` if the command was a plain miss.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for interpreting a line.
pub type Result<T> = std::result::Result<T, Error>;
