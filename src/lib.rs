//! # mdb - A Tiny In-Memory Key-Value Database
//!
//! mdb is an in-memory key-value store driven by a minimal line-oriented
//! command language. It demonstrates a table-driven tokenizer, a small
//! command grammar, and a reader/writer-locked store shared by concurrent
//! callers.
//!
//! ## Features
//!
//! - **FSM Tokenizer**: explicit state-transition table with strict lexical rules
//! - **Arity Checking**: every verb validated before it reaches the store
//! - **Wildcards**: `GET` and `DEL` accept `*` patterns matched against whole keys
//! - **Concurrent Engine**: one `RwLock` over the map, shared through `Arc`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Database                                   │
//! │                                                                         │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐                  │
//! │  │    Lexer    │───>│  Validator  │───>│  Command    │                  │
//! │  │    (FSM)    │    │   (arity)   │    │  Handler    │                  │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘                  │
//! │                                               │                         │
//! │                                               ▼                         │
//! │  ┌─────────────┐    ┌──────────────────────────────────────────────┐   │
//! │  │  Pattern    │<───│              StorageEngine                   │   │
//! │  │  Matcher    │    │     RwLock<HashMap<String, Bytes>>           │   │
//! │  └─────────────┘    └──────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use mdb::Database;
//!
//! let db = Database::new();
//!
//! db.interpret("SET a 1").unwrap();
//! db.interpret("SET ab 2").unwrap();
//! db.interpret("SET b 3").unwrap();
//!
//! let listing = db.interpret("GET a*").unwrap();
//! assert_eq!(listing.lines().count(), 2);
//!
//! db.interpret("DEL a*").unwrap();
//! assert_eq!(db.interpret("GET b").unwrap(), "3");
//! ```
//!
//! ## Supported Commands
//!
//! - `SET key value`
//! - `GET key` / `GET pattern`
//! - `DEL key` / `DEL pattern`
//!
//! Verbs are upper-case ASCII. Arguments may contain letters, digits and
//! `* / _ - . + = ? & % $ # @ !`.
//!
//! ## Module Overview
//!
//! - [`compute`]: tokenizer, command model and parser
//! - [`storage`]: storage engine and wildcard patterns
//! - [`commands`]: command execution and result rendering
//! - [`config`] / [`logging`]: shell configuration and log setup
//! - [`shell`]: the interactive prompt loop

pub mod commands;
pub mod compute;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod shell;
pub mod storage;

// Re-export commonly used types for convenience
pub use commands::{CommandExecutor, CommandHandler, ExecuteError};
pub use compute::{Command, CommandParser, ParseError, Parser};
pub use config::Config;
pub use database::Database;
pub use error::{Error, ErrorKind, Result};
pub use storage::{Engine, EngineError, StorageEngine, StorageStats};

/// Version of mdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prompt printed by the interactive shell
pub const PROMPT: &str = "> ";
