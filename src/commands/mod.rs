//! Command Handler Module
//!
//! This module implements the execution layer of mdb. It receives commands
//! validated by the parser, runs them against the storage engine, and turns
//! the outcome into the text shown to the user.
//!
//! ## Architecture
//!
//! ```text
//! Raw line
//!       │
//!       ▼
//! ┌─────────────────┐
//! │     Parser      │  (compute module)
//! └────────┬────────┘
//!          │ Command
//!          ▼
//! ┌─────────────────┐
//! │ CommandHandler  │  (this module)
//! │                 │
//! │  - Validate     │
//! │  - Dispatch     │
//! │  - Render       │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ StorageEngine   │  (storage module)
//! └─────────────────┘
//! ```
//!
//! ## Supported Commands
//!
//! - `SET`, `GET`, `DEL`
//! - `GET` and `DEL` accept `*` wildcards in the key

pub mod handler;

// Re-export the main command handler
pub use handler::{CommandExecutor, CommandHandler, ExecuteError, ExecuteResult};
