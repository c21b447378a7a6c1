//! Finite-State Tokenizer
//!
//! This module turns a raw input line into the flat list of tokens the
//! command parser works with. It is driven by an explicit transition table
//! rather than ad-hoc string splitting, so every lexical rule lives in one
//! place and can be tested state by state.
//!
//! ## State Machine
//!
//! ```text
//!            whitespace              A-Z                whitespace / arg char
//!           ┌──────────┐         ┌────────┐            ┌─────────────────┐
//!           ▼          │         ▼        │            ▼                 │
//!      ┌─────────┐     │    ┌─────────┐   │      ┌───────────┐           │
//! ────>│  Start  │─────┴───>│ Command │───┴─────>│ Arguments │───────────┘
//!      └─────────┘   A-Z    └─────────┘ whitespace└───────────┘
//!           │                    │                    │
//!           └────────────────────┴────────────────────┘
//!                                │ anything else
//!                                ▼
//!                           ┌─────────┐
//!                           │   End   │  (lexical error)
//!                           └─────────┘
//! ```
//!
//! Each state owns an ordered list of [`Transition`]s. The first transition
//! whose predicate accepts the character wins; there is no longest-match
//! lookahead.

use thiserror::Error;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Maximum number of tokens a line may produce (the verb plus two arguments).
pub const MAX_TOKENS: usize = 3;

/// Errors produced while tokenizing a line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The line contained no tokens at all
    #[error("empty command")]
    EmptyCommand,

    /// The first non-blank character cannot start a command
    #[error("invalid character at start: '{0}'")]
    InvalidStart(char),

    /// A character other than `A-Z` inside the command verb
    #[error("invalid character in command: '{0}'")]
    InvalidCommandChar(char),

    /// A fourth token was about to be produced
    #[error("too many arguments")]
    TooManyArguments,

    /// A character outside the argument alphabet
    #[error("invalid character in argument: '{0}'")]
    InvalidArgumentChar(char),

    /// A character fed to the terminal state
    #[error("unexpected character after end of command: '{0}'")]
    AfterEnd(char),
}

/// States of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Skipping leading whitespace, waiting for the verb
    Start,
    /// Inside the command verb
    Command,
    /// Between or inside arguments
    Arguments,
    /// Terminal state, only reached by rejecting input
    End,
}

/// What the tokenizer does with the character that triggered a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop the character
    Skip,
    /// Append the character to the command verb
    PushCommand,
    /// Close the command verb
    CloseCommand,
    /// Append the character to the pending argument
    PushArgument,
    /// Close the pending argument, if any
    FlushArgument,
}

/// Outcome of a table row: mutate the buffers or abort tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Apply(Action),
    Reject(Rejection),
}

/// Reason attached to a rejecting transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AtStart,
    InCommand,
    InArgument,
}

impl Rejection {
    fn into_error(self, ch: char) -> LexError {
        match self {
            Rejection::AtStart => LexError::InvalidStart(ch),
            Rejection::InCommand => LexError::InvalidCommandChar(ch),
            Rejection::InArgument => LexError::InvalidArgumentChar(ch),
        }
    }
}

/// One row of the transition table.
#[derive(Clone, Copy)]
pub struct Transition {
    /// Character predicate guarding this row
    pub accepts: fn(char) -> bool,
    /// State entered when the row fires
    pub next: State,
    /// Effect on the token buffers
    pub effect: Effect,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("next", &self.next)
            .field("effect", &self.effect)
            .finish()
    }
}

const START: &[Transition] = &[
    Transition {
        accepts: is_whitespace,
        next: State::Start,
        effect: Effect::Apply(Action::Skip),
    },
    Transition {
        accepts: is_command_char,
        next: State::Command,
        effect: Effect::Apply(Action::PushCommand),
    },
    Transition {
        accepts: any_char,
        next: State::End,
        effect: Effect::Reject(Rejection::AtStart),
    },
];

const COMMAND: &[Transition] = &[
    Transition {
        accepts: is_whitespace,
        next: State::Arguments,
        effect: Effect::Apply(Action::CloseCommand),
    },
    Transition {
        accepts: is_command_char,
        next: State::Command,
        effect: Effect::Apply(Action::PushCommand),
    },
    Transition {
        accepts: any_char,
        next: State::End,
        effect: Effect::Reject(Rejection::InCommand),
    },
];

const ARGUMENTS: &[Transition] = &[
    Transition {
        accepts: is_whitespace,
        next: State::Arguments,
        effect: Effect::Apply(Action::FlushArgument),
    },
    Transition {
        accepts: is_argument_char,
        next: State::Arguments,
        effect: Effect::Apply(Action::PushArgument),
    },
    Transition {
        accepts: any_char,
        next: State::End,
        effect: Effect::Reject(Rejection::InArgument),
    },
];

/// Returns the ordered transition rows for a state.
pub fn transitions(state: State) -> &'static [Transition] {
    match state {
        State::Start => START,
        State::Command => COMMAND,
        State::Arguments => ARGUMENTS,
        State::End => &[],
    }
}

/// Pure transition function: picks the first row of `state` accepting `ch`.
///
/// Rejecting rows are turned into the matching [`LexError`] here, so callers
/// only ever see actions that mutate the token buffers.
pub fn transition(state: State, ch: char) -> Result<(State, Action), LexError> {
    let row = transitions(state)
        .iter()
        .find(|row| (row.accepts)(ch))
        .ok_or(LexError::AfterEnd(ch))?;

    match row.effect {
        Effect::Apply(action) => Ok((row.next, action)),
        Effect::Reject(reason) => Err(reason.into_error(ch)),
    }
}

/// Tokenizes a single command line.
///
/// # Example
///
/// ```
/// use mdb::compute::lexer::tokenize;
///
/// let tokens = tokenize("  SET   a   b  ").unwrap();
/// assert_eq!(tokens, vec!["SET", "a", "b"]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<String>, LexError> {
    Lexer::new().run(input)
}

/// Token buffers driven by the transition table.
#[derive(Debug)]
struct Lexer {
    state: State,
    current: String,
    tokens: Vec<String>,
}

impl Lexer {
    fn new() -> Self {
        Self {
            state: State::Start,
            current: String::new(),
            tokens: Vec::with_capacity(MAX_TOKENS),
        }
    }

    fn run(mut self, input: &str) -> Result<Vec<String>, LexError> {
        for ch in input.chars() {
            let (next, action) = transition(self.state, ch)?;
            self.apply(action, ch)?;
            self.state = next;
        }

        self.finish()
    }

    fn apply(&mut self, action: Action, ch: char) -> Result<(), LexError> {
        match action {
            Action::Skip => {}
            Action::PushCommand => self.current.push(ch),
            Action::CloseCommand => {
                if self.current.is_empty() {
                    return Err(LexError::EmptyCommand);
                }
                self.close_token();
            }
            Action::PushArgument => {
                if self.tokens.len() >= MAX_TOKENS {
                    return Err(LexError::TooManyArguments);
                }
                self.current.push(ch);
            }
            Action::FlushArgument => {
                if !self.current.is_empty() {
                    self.close_token();
                }
            }
        }
        Ok(())
    }

    fn close_token(&mut self) {
        self.tokens.push(std::mem::take(&mut self.current));
    }

    fn finish(mut self) -> Result<Vec<String>, LexError> {
        match self.state {
            State::Start => return Err(LexError::EmptyCommand),
            State::Command | State::Arguments => {
                if !self.current.is_empty() {
                    self.close_token();
                }
            }
            State::End => {}
        }

        if self.tokens.is_empty() {
            return Err(LexError::EmptyCommand);
        }

        Ok(self.tokens)
    }
}

// ============================================================================
// Character classes
// ============================================================================

/// Whitespace as understood by Unicode.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Characters allowed in the command verb.
#[inline]
pub fn is_command_char(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// Punctuation accepted inside arguments.
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '*' | '/' | '_' | '-' | '.' | '+' | '=' | '?' | '&' | '%' | '$' | '#' | '@' | '!'
    )
}

/// Unicode letters (general category `L*`).
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Unicode decimal digits (general category `Nd`). Fractions, superscripts
/// and letter-like numerals are not digits.
pub fn is_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Characters allowed in arguments: letters, digits and [`is_punctuation`].
#[inline]
pub fn is_argument_char(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || is_punctuation(ch)
}

fn any_char(_: char) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<String> {
        tokenize(input).unwrap()
    }

    #[test]
    fn test_command_only() {
        assert_eq!(tokens("HELP"), vec!["HELP"]);
        assert_eq!(tokens("   CMD   "), vec!["CMD"]);
    }

    #[test]
    fn test_command_with_arguments() {
        assert_eq!(tokens("RUN test"), vec!["RUN", "test"]);
        assert_eq!(tokens("CMD arg1 arg2"), vec!["CMD", "arg1", "arg2"]);
        assert_eq!(tokens("CMD 1arg arg2"), vec!["CMD", "1arg", "arg2"]);
        assert_eq!(tokens("CMD arg_1 arg-2"), vec!["CMD", "arg_1", "arg-2"]);
        assert_eq!(tokens("CMD arg@1"), vec!["CMD", "arg@1"]);
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(tokens("SET a b"), vec!["SET", "a", "b"]);
        assert_eq!(tokens("  SET   a   b  "), vec!["SET", "a", "b"]);
        assert_eq!(tokens("SET\ta\t\tb\n"), vec!["SET", "a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), Err(LexError::EmptyCommand));
        assert_eq!(tokenize("    "), Err(LexError::EmptyCommand));
        assert_eq!(tokenize("\t\r\n"), Err(LexError::EmptyCommand));
    }

    #[test]
    fn test_invalid_start() {
        assert_eq!(tokenize("command arg1"), Err(LexError::InvalidStart('c')));
        assert_eq!(tokenize("#CMD arg1"), Err(LexError::InvalidStart('#')));
        assert_eq!(
            tokenize("command arg1").unwrap_err().to_string(),
            "invalid character at start: 'c'"
        );
    }

    #[test]
    fn test_invalid_command_char() {
        assert_eq!(
            tokenize("COMmAND arg1"),
            Err(LexError::InvalidCommandChar('m'))
        );
        assert_eq!(tokenize("GET1 a"), Err(LexError::InvalidCommandChar('1')));
    }

    #[test]
    fn test_invalid_argument_char() {
        assert_eq!(
            tokenize("SET key val,ue"),
            Err(LexError::InvalidArgumentChar(','))
        );
        assert_eq!(
            tokenize("GET \"quoted\""),
            Err(LexError::InvalidArgumentChar('"'))
        );
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            tokenize("CMD arg1 arg2 arg3"),
            Err(LexError::TooManyArguments)
        );
        // Trailing whitespace after the third token is fine
        assert_eq!(tokens("CMD arg1 arg2   "), vec!["CMD", "arg1", "arg2"]);
    }

    #[test]
    fn test_error_wins_over_partial_result() {
        // The first two tokens are valid but nothing is returned
        assert!(tokenize("SET key (value)").is_err());
    }

    #[test]
    fn test_start_transitions() {
        assert_eq!(
            transition(State::Start, ' '),
            Ok((State::Start, Action::Skip))
        );
        assert_eq!(
            transition(State::Start, 'G'),
            Ok((State::Command, Action::PushCommand))
        );
        assert_eq!(
            transition(State::Start, 'g'),
            Err(LexError::InvalidStart('g'))
        );
        assert_eq!(
            transition(State::Start, '*'),
            Err(LexError::InvalidStart('*'))
        );
    }

    #[test]
    fn test_command_transitions() {
        assert_eq!(
            transition(State::Command, 'E'),
            Ok((State::Command, Action::PushCommand))
        );
        assert_eq!(
            transition(State::Command, '\t'),
            Ok((State::Arguments, Action::CloseCommand))
        );
        assert_eq!(
            transition(State::Command, '_'),
            Err(LexError::InvalidCommandChar('_'))
        );
    }

    #[test]
    fn test_arguments_transitions() {
        assert_eq!(
            transition(State::Arguments, ' '),
            Ok((State::Arguments, Action::FlushArgument))
        );
        for ch in ['a', 'Z', '7', '*', '/', '!', 'ж'] {
            assert_eq!(
                transition(State::Arguments, ch),
                Ok((State::Arguments, Action::PushArgument)),
                "char {ch:?}"
            );
        }
        for ch in [',', '"', '(', ')', ':', ';'] {
            assert_eq!(
                transition(State::Arguments, ch),
                Err(LexError::InvalidArgumentChar(ch))
            );
        }
    }

    #[test]
    fn test_end_rejects_everything() {
        assert!(transitions(State::End).is_empty());
        assert_eq!(transition(State::End, 'A'), Err(LexError::AfterEnd('A')));
        assert_eq!(transition(State::End, ' '), Err(LexError::AfterEnd(' ')));
    }

    #[test]
    fn test_rejecting_rows_lead_to_end() {
        for state in [State::Start, State::Command, State::Arguments] {
            let last = transitions(state).last().unwrap();
            assert_eq!(last.next, State::End);
            assert!(matches!(last.effect, Effect::Reject(_)));
        }
    }

    #[test]
    fn test_non_decimal_numerics_rejected_in_arguments() {
        // Vulgar fraction, superscript, roman numeral, combining mark
        for ch in ['½', '²', 'Ⅲ', '\u{0345}'] {
            assert_eq!(
                tokenize(&format!("SET k a{ch}")),
                Err(LexError::InvalidArgumentChar(ch)),
                "char {ch:?}"
            );
        }
        assert_eq!(tokens("SET k ٣"), vec!["SET", "k", "٣"]);
    }

    #[test]
    fn test_whitespace_wins_over_later_rows() {
        // Rows are ordered: whitespace is checked before the catch-all
        for state in [State::Start, State::Command, State::Arguments] {
            let first = transitions(state)[0];
            assert!((first.accepts)(' '));
        }
    }

    #[test]
    fn test_character_classes() {
        assert!(is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('A'));

        assert!(is_command_char('A'));
        assert!(!is_command_char('a'));
        assert!(!is_command_char('Б'));

        for ch in ['.', '!', '?', '-', '$', '#'] {
            assert!(is_punctuation(ch));
        }
        for ch in [',', '"', '(', ')', 'A', '1', ' '] {
            assert!(!is_punctuation(ch));
        }

        assert!(is_argument_char('Б'));
        assert!(is_argument_char('5'));
        assert!(is_letter('ʰ'));
        assert!(is_digit('٣'));
        assert!(!is_digit('½'));
        assert!(!is_argument_char('²'));
        assert!(!is_argument_char(' '));
        assert!(!is_argument_char('\n'));
    }
}
