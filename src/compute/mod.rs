//! Command Front-End
//!
//! This module turns raw text into validated commands.
//!
//! ## Pipeline
//!
//! ```text
//! "  SET  key  value "
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  FSM Tokenizer  │  lexer: Start → Command → Arguments
//! └────────┬────────┘
//!          │ ["SET", "key", "value"]
//!          ▼
//! ┌─────────────────┐
//! │    Validator    │  command: verb + arity
//! └────────┬────────┘
//!          │ Command { SET, [key, value] }
//!          ▼
//!     CommandHandler
//! ```
//!
//! ## Modules
//!
//! - `lexer`: character-level state machine producing tokens
//! - `command`: the `Command` model and its arity rules
//! - `parser`: tokenizer + validator behind the `CommandParser` trait

pub mod command;
pub mod lexer;
pub mod parser;

// Re-export commonly used types for convenience
pub use command::{Action, Command, GrammarError};
pub use lexer::{tokenize, LexError};
pub use parser::{CommandParser, ParseError, ParseResult, Parser};
