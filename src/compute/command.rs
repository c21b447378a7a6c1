//! Command Model
//!
//! A [`Command`] is the verb plus its arguments, exactly as they came out of
//! the tokenizer. [`Command::validate`] enforces the per-verb arity; it never
//! looks at argument contents, so wildcards are legal anywhere and are left
//! for the storage layer to interpret.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The verbs the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Get,
    Set,
    Del,
}

impl Action {
    /// The keyword as typed by the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Get => "GET",
            Action::Set => "SET",
            Action::Del => "DEL",
        }
    }

    /// Number of arguments the verb requires.
    pub fn arity(&self) -> usize {
        match self {
            Action::Set => 2,
            Action::Get | Action::Del => 1,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Action::Get),
            "SET" => Ok(Action::Set),
            "DEL" => Ok(Action::Del),
            other => Err(GrammarError::UnknownCommand(other.to_string())),
        }
    }
}

/// Errors raised when a tokenized line does not form a valid command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("2 arguments required for SET command")]
    SetArity,

    #[error("command {0} requires 1 argument")]
    SingleArity(String),
}

/// A command line split into its verb and arguments.
///
/// The action is kept as the raw keyword so that an unknown verb can still be
/// carried to [`Command::validate`] and reported by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    action: String,
    args: Vec<String>,
}

impl Command {
    /// Builds a command from the tokenizer output (first token is the verb).
    ///
    /// Returns `None` for an empty token list.
    pub fn from_tokens(mut tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        let args = tokens.split_off(1);
        let action = tokens.pop()?;
        Some(Self { action, args })
    }

    pub fn new(action: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            action: action.into(),
            args,
        }
    }

    /// The raw verb keyword.
    pub fn keyword(&self) -> &str {
        &self.action
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Checks the verb and its arity, returning the recognized [`Action`].
    pub fn validate(&self) -> Result<Action, GrammarError> {
        let action: Action = self.action.parse()?;

        if self.args.len() != action.arity() {
            return Err(match action {
                Action::Set => GrammarError::SetArity,
                Action::Get | Action::Del => GrammarError::SingleArity(self.action.clone()),
            });
        }

        Ok(action)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
