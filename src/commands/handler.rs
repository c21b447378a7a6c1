//! Command Handler Module
//!
//! This module executes validated commands against the storage engine and
//! renders the results as text.
//!
//! ## Supported Commands
//!
//! - `SET key value` - Store a value, returns an empty string
//! - `GET key` - Return the raw value
//! - `GET pattern` - Return every matching entry as `key: value` lines
//! - `DEL key` - Remove a key, returns an empty string
//! - `DEL pattern` - Remove every matching key, returns an empty string
//!
//! A key containing `*` is treated as a pattern; see
//! [`crate::storage::pattern`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CommandHandler                          │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐     │
//! │  │ validate()  │───>│  dispatch() │───>│  cmd_xxx()  │     │
//! │  └─────────────┘    └─────────────┘    └─────────────┘     │
//! │                                               │             │
//! │                                               ▼             │
//! │                                         impl Engine         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::compute::{Action, Command, GrammarError};
use crate::storage::{contains_wildcard, Engine, EngineError, StorageEngine};
use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while executing a command.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The command failed the defensive re-validation
    #[error("invalid command: {0}")]
    Grammar(#[from] GrammarError),

    /// The engine rejected the operation
    #[error("{op} failed: {source}")]
    Engine {
        op: &'static str,
        #[source]
        source: EngineError,
    },
}

impl ExecuteError {
    fn engine(op: &'static str) -> impl FnOnce(EngineError) -> Self {
        move |source| ExecuteError::Engine { op, source }
    }
}

/// Result type for command execution.
pub type ExecuteResult<T> = Result<T, ExecuteError>;

/// Anything that can run a validated command and render its result.
///
/// [`CommandHandler`] is the real implementation; tests substitute their own.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &Command) -> ExecuteResult<String>;
}

/// Executes commands against a shared engine.
///
/// Cloning a handler is cheap and every clone talks to the same engine, so
/// one handler per worker is the intended usage.
#[derive(Debug)]
pub struct CommandHandler<E = StorageEngine> {
    /// The storage engine
    storage: Arc<E>,
}

impl<E> Clone for CommandHandler<E> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<E: Engine> CommandHandler<E> {
    /// Creates a new command handler with the given storage engine.
    pub fn new(storage: Arc<E>) -> Self {
        Self { storage }
    }

    /// The engine this handler executes against.
    pub fn storage(&self) -> &Arc<E> {
        &self.storage
    }

    /// Dispatches a command to its handler.
    fn dispatch(&self, action: Action, args: &[String]) -> ExecuteResult<String> {
        match action {
            Action::Set => self.cmd_set(args),
            Action::Get => self.cmd_get(args),
            Action::Del => self.cmd_del(args),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// SET key value
    fn cmd_set(&self, args: &[String]) -> ExecuteResult<String> {
        let [key, value] = args else {
            return Err(GrammarError::SetArity.into());
        };

        self.storage
            .set(key.clone(), Bytes::copy_from_slice(value.as_bytes()));
        Ok(String::new())
    }

    /// GET key | GET pattern
    fn cmd_get(&self, args: &[String]) -> ExecuteResult<String> {
        let [key] = args else {
            return Err(GrammarError::SingleArity(Action::Get.to_string()).into());
        };

        if contains_wildcard(key) {
            let found = self
                .storage
                .get_by_pattern(key)
                .map_err(ExecuteError::engine("get_by_pattern"))?;
            return Ok(render_entries(&found));
        }

        let value = self
            .storage
            .get(key)
            .map_err(ExecuteError::engine("get"))?;
        Ok(String::from_utf8_lossy(&value).into_owned())
    }

    /// DEL key | DEL pattern
    fn cmd_del(&self, args: &[String]) -> ExecuteResult<String> {
        let [key] = args else {
            return Err(GrammarError::SingleArity(Action::Del.to_string()).into());
        };

        if contains_wildcard(key) {
            let removed = self
                .storage
                .delete_by_pattern(key)
                .map_err(ExecuteError::engine("delete_by_pattern"))?;
            debug!(pattern = %key, removed, "deleted by pattern");
        } else {
            self.storage
                .delete(key)
                .map_err(ExecuteError::engine("delete"))?;
        }

        Ok(String::new())
    }
}

impl<E: Engine> CommandExecutor for CommandHandler<E> {
    fn execute(&self, command: &Command) -> ExecuteResult<String> {
        let action = command.validate()?;

        debug!(action = %action, args = ?command.args(), "executing command");
        self.dispatch(action, command.args())
    }
}

/// Renders pattern results as `key: value` lines, in map iteration order.
fn render_entries<'a>(entries: impl IntoIterator<Item = (&'a String, &'a Bytes)>) -> String {
    entries
        .into_iter()
        .map(|(key, value)| format!("{key}: {}\n", String::from_utf8_lossy(value)))
        .collect()
}
