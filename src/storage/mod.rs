//! Storage Engine Module
//!
//! This module provides the storage side of mdb: the thread-safe key-value
//! engine and the wildcard pattern matcher it uses for `GET`/`DEL` with `*`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     StorageEngine                           │
//! │         RwLock<HashMap<String, Bytes>> + counters           │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                            │ compile per call
//!              ┌─────────────┴─────────────┐
//!              │         Pattern           │
//!              │   "a*"  →  ^a.*$ (regex)  │
//!              └───────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use mdb::storage::{Engine, StorageEngine};
//! use bytes::Bytes;
//! use std::sync::Arc;
//!
//! let engine = Arc::new(StorageEngine::new());
//!
//! engine.set("user1".into(), Bytes::from("Ariz"));
//! engine.set("user2".into(), Bytes::from("Bob"));
//!
//! let users = engine.get_by_pattern("user*").unwrap();
//! assert_eq!(users.len(), 2);
//! ```

pub mod engine;
pub mod pattern;

use bytes::Bytes;
use std::collections::HashMap;

// Re-export commonly used types
pub use engine::{EngineError, EngineResult, StorageEngine, StorageStats};
pub use pattern::{contains_wildcard, Pattern, PatternError};

/// The key-value operations the command layer relies on.
///
/// [`StorageEngine`] is the real implementation. Every call is one logical
/// operation under one lock acquisition; callers get no atomicity across
/// calls.
pub trait Engine: Send + Sync {
    /// Inserts or overwrites `key`.
    fn set(&self, key: String, value: Bytes);

    /// Exact lookup.
    fn get(&self, key: &str) -> EngineResult<Bytes>;

    /// Exact removal. A missing key is reported as not found.
    fn delete(&self, key: &str) -> EngineResult<()>;

    /// Every entry whose key matches `pattern`. An empty result is reported
    /// as not found.
    fn get_by_pattern(&self, pattern: &str) -> EngineResult<HashMap<String, Bytes>>;

    /// Removes every key matching `pattern` and returns how many were removed.
    /// Removing nothing is reported as not found.
    fn delete_by_pattern(&self, pattern: &str) -> EngineResult<usize>;
}
