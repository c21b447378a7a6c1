//! Thread-Safe Storage Engine
//!
//! This module implements the in-memory key-value store behind the
//! interpreter. It owns the map exclusively and is the only place in the
//! crate with shared mutable state.
//!
//! ## Design Decisions
//!
//! 1. **One RwLock**: A single reader/writer lock guards the whole map. Reads
//!    run concurrently, a write excludes everyone else.
//! 2. **One lock per operation**: Every public method takes the lock once and
//!    releases it before returning. Nothing spans two operations.
//! 3. **Bytes values**: Values are handed out as `Bytes`, so a `get` under the
//!    read lock is a reference-count bump rather than a copy.
//! 4. **Snapshot-then-delete**: Pattern deletes collect the matching keys
//!    first and remove them afterwards, never mutating the map mid-iteration.
//!
//! ## Concurrency Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     StorageEngine                           │
//! │                                                             │
//! │   get / get_by_pattern ──────► RwLock::read()  (shared)     │
//! │   set / delete / delete_by_pattern ► RwLock::write() (excl) │
//! │                                                             │
//! │               ┌──────────────────────────┐                  │
//! │               │ HashMap<String, Bytes>   │                  │
//! │               └──────────────────────────┘                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::storage::pattern::{Pattern, PatternError};
use crate::storage::Engine;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::trace;

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No value is stored under the exact key
    #[error("'{key}' - key not found")]
    NotFound { key: String },

    /// The pattern matched no stored key
    #[error("'{pattern}' - no matching keys found")]
    NoMatch { pattern: String },

    /// The pattern could not be compiled
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl EngineError {
    /// Returns `true` for the "miss" variants, as opposed to real failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. } | EngineError::NoMatch { .. })
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    /// Number of stored keys
    pub keys: u64,
    /// Total GET operations (exact and pattern)
    pub get_ops: u64,
    /// Total SET operations
    pub set_ops: u64,
    /// Total DEL operations (exact and pattern)
    pub del_ops: u64,
}

/// The main storage engine.
///
/// Designed to be wrapped in an `Arc` and shared by every caller. Multiple
/// engines can coexist; there is no global state.
///
/// # Example
///
/// ```
/// use mdb::storage::{Engine, StorageEngine};
///
/// let engine = StorageEngine::new();
///
/// engine.set("name".into(), "Ariz".into());
/// assert_eq!(engine.get("name").unwrap(), "Ariz");
///
/// engine.delete("name").unwrap();
/// assert!(engine.get("name").unwrap_err().is_not_found());
/// ```
pub struct StorageEngine {
    /// The key-value map
    data: RwLock<HashMap<String, Bytes>>,

    /// Statistics: total GET operations
    get_count: AtomicU64,

    /// Statistics: total SET operations
    set_count: AtomicU64,

    /// Statistics: total DEL operations
    del_count: AtomicU64,
}

impl std::fmt::Debug for StorageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageEngine")
            .field("keys", &self.len())
            .field("get_count", &self.get_count.load(Ordering::Relaxed))
            .field("set_count", &self.set_count.load(Ordering::Relaxed))
            .field("del_count", &self.del_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for StorageEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageEngine {
    /// Creates an empty storage engine.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            get_count: AtomicU64::new(0),
            set_count: AtomicU64::new(0),
            del_count: AtomicU64::new(0),
        }
    }

    // A panic while holding the lock cannot leave the map half-updated
    // (every write is a single insert/remove), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Bytes>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Bytes>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> u64 {
        self.read().len() as u64
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a snapshot of the engine statistics.
    pub fn stats(&self) -> StorageStats {
        StorageStats {
            keys: self.len(),
            get_ops: self.get_count.load(Ordering::Relaxed),
            set_ops: self.set_count.load(Ordering::Relaxed),
            del_ops: self.del_count.load(Ordering::Relaxed),
        }
    }
}

impl Engine for StorageEngine {
    fn set(&self, key: String, value: Bytes) {
        self.set_count.fetch_add(1, Ordering::Relaxed);
        self.write().insert(key, value);
    }

    fn get(&self, key: &str) -> EngineResult<Bytes> {
        self.get_count.fetch_add(1, Ordering::Relaxed);

        self.read()
            .get(key)
            .cloned()
            .ok_or_else(|| EngineError::NotFound {
                key: key.to_string(),
            })
    }

    fn delete(&self, key: &str) -> EngineResult<()> {
        self.del_count.fetch_add(1, Ordering::Relaxed);

        match self.write().remove(key) {
            Some(_) => Ok(()),
            None => Err(EngineError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    fn get_by_pattern(&self, pattern: &str) -> EngineResult<HashMap<String, Bytes>> {
        self.get_count.fetch_add(1, Ordering::Relaxed);
        let matcher = Pattern::compile(pattern)?;

        let found: HashMap<String, Bytes> = self
            .read()
            .iter()
            .filter(|(key, _)| matcher.matches(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        trace!(pattern, matched = found.len(), "pattern scan");

        if found.is_empty() {
            return Err(EngineError::NoMatch {
                pattern: pattern.to_string(),
            });
        }
        Ok(found)
    }

    fn delete_by_pattern(&self, pattern: &str) -> EngineResult<usize> {
        self.del_count.fetch_add(1, Ordering::Relaxed);
        let matcher = Pattern::compile(pattern)?;

        let mut data = self.write();

        let doomed: Vec<String> = data
            .keys()
            .filter(|key| matcher.matches(key))
            .cloned()
            .collect();

        if doomed.is_empty() {
            return Err(EngineError::NoMatch {
                pattern: pattern.to_string(),
            });
        }

        for key in &doomed {
            data.remove(key);
        }

        trace!(pattern, removed = doomed.len(), "pattern delete");
        Ok(doomed.len())
    }
}
