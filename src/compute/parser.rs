//! Command Parser
//!
//! Glues the tokenizer and the command validator together: a raw line goes
//! in, a validated [`Command`] or a [`ParseError`] comes out. There is no
//! notion of a partially valid command.

use crate::compute::command::{Command, GrammarError};
use crate::compute::lexer::{self, LexError};
use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is lexically malformed
    #[error("failed to tokenize: {0}")]
    Lex(#[from] LexError),

    /// The tokens do not form a known command with the right arity
    #[error("failed to validate command: {0}")]
    Grammar(#[from] GrammarError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that can turn a line into a validated command.
///
/// [`Parser`] is the real implementation; tests substitute their own.
pub trait CommandParser: Send + Sync {
    fn parse(&self, line: &str) -> ParseResult<Command>;
}

/// The stateless command-line parser.
///
/// # Example
///
/// ```
/// use mdb::compute::{CommandParser, Parser};
///
/// let err = Parser::new().parse("GET user:*").unwrap_err();
/// assert!(err.to_string().contains("invalid character in argument: ':'"));
///
/// let command = Parser::new().parse("GET user*").unwrap();
/// assert_eq!(command.args(), &["user*".to_string()]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }
}

impl CommandParser for Parser {
    fn parse(&self, line: &str) -> ParseResult<Command> {
        let tokens = lexer::tokenize(line)?;
        let command = Command::from_tokens(tokens).ok_or(LexError::EmptyCommand)?;
        command.validate()?;
        Ok(command)
    }
}
