//! Database facade.
//!
//! [`Database`] is the single entry point used by the shell: one call to
//! [`Database::interpret`] parses a line and executes it. Parser and executor
//! are plugged in through the [`CommandParser`] and [`CommandExecutor`]
//! traits, so either side can be replaced in tests.

use crate::commands::{CommandExecutor, CommandHandler};
use crate::compute::{CommandParser, Parser};
use crate::error::Result;
use crate::storage::StorageEngine;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parser + executor pair behind `interpret`.
#[derive(Debug, Clone)]
pub struct Database<P = Parser, X = CommandHandler> {
    parser: P,
    executor: X,
}

impl Database {
    /// A database backed by a fresh [`StorageEngine`].
    pub fn new() -> Self {
        Self::with_storage(Arc::new(StorageEngine::new()))
    }

    /// A database executing against an existing engine.
    pub fn with_storage(storage: Arc<StorageEngine>) -> Self {
        Self::from_parts(Parser::new(), CommandHandler::new(storage))
    }

    /// The engine behind this database.
    pub fn storage(&self) -> &Arc<StorageEngine> {
        self.executor.storage()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CommandParser, X: CommandExecutor> Database<P, X> {
    pub fn from_parts(parser: P, executor: X) -> Self {
        Self { parser, executor }
    }

    /// Parses and executes one command line.
    ///
    /// # Example
    ///
    /// ```
    /// use mdb::Database;
    ///
    /// let db = Database::new();
    /// assert_eq!(db.interpret("SET key1 value1").unwrap(), "");
    /// assert_eq!(db.interpret("GET key1").unwrap(), "value1");
    /// assert!(db.interpret("GET nomatch*").unwrap_err().is_not_found());
    /// ```
    pub fn interpret(&self, line: &str) -> Result<String> {
        debug!(request = line, "received request");

        let outcome: Result<String> = self
            .parser
            .parse(line)
            .map_err(Into::into)
            .and_then(|command| self.executor.execute(&command).map_err(Into::into));

        match &outcome {
            Ok(_) => debug!("request processed successfully"),
            Err(e) => warn!(kind = ?e.kind(), error = %e, "request failed"),
        }

        outcome
    }
}
