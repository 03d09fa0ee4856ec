//! Feedback store: append-only sequence, persisted as one JSON blob
//!
//! Key invariants:
//! - newest first (prepend on append)
//! - the whole sequence is rewritten on every append (single writer)
//! - loading never fails: unreadable blobs load as empty, unreadable
//!   entries are skipped

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::types::{FeedbackRecord, ReasonCode};
use crate::STORAGE_KEY;

/// Error from the underlying key-value storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage write rejected")]
    WriteRejected,
}

/// Error surfaced by a best-effort append
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize feedback history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to persist feedback history: {0}")]
    Storage(#[from] StorageError),
}

/// Durable key-value storage the store writes through
///
/// Injected so tests can swap the filesystem for an in-memory fake.
pub trait Storage {
    /// Read the blob under a key, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;
    /// Replace the blob under a key
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at a data directory (created lazily on write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage whose every write fails (quota-exceeded simulation)
    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Seed a blob under a key before the store loads it
    pub fn seed(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Raw blob currently stored under a key
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteRejected);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append-only feedback store over injected storage
#[derive(Debug)]
pub struct FeedbackStore<S: Storage> {
    storage: S,
    key: String,
    records: Vec<FeedbackRecord>,
}

impl<S: Storage> FeedbackStore<S> {
    /// Open the store under the fixed default key, loading existing history
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Open the store under an explicit key
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = decode_blob(storage.get(&key).as_deref());
        Self {
            storage,
            key,
            records,
        }
    }

    /// Prepend a record and synchronously persist the whole sequence
    ///
    /// Best-effort: on a storage failure the in-memory sequence still holds
    /// the record, so the running session stays consistent while history
    /// lags (it will be observed again only if a later write succeeds).
    pub fn append(&mut self, record: FeedbackRecord) -> Result<(), StoreError> {
        self.records.insert(0, record);

        let blob = serde_json::to_string(&self.records)?;
        self.storage.set(&self.key, &blob).map_err(|e| {
            warn!(
                reason = ReasonCode::S002_PERSIST_FAILED.code(),
                error = %e,
                "feedback not written to durable storage"
            );
            e
        })?;
        Ok(())
    }

    /// Re-read and decode the persisted blob
    ///
    /// Returns an empty sequence when nothing is stored or the blob is
    /// unreadable; never an error.
    pub fn load_all(&self) -> Vec<FeedbackRecord> {
        decode_blob(self.storage.get(&self.key).as_deref())
    }

    /// Current in-memory sequence, newest first
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    /// Number of records held in memory
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record has been loaded or appended
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decode a persisted blob, recovering locally from every malformation
fn decode_blob(blob: Option<&str>) -> Vec<FeedbackRecord> {
    let Some(raw) = blob else {
        return Vec::new();
    };

    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                reason = ReasonCode::S001_BLOB_MALFORMED.code(),
                error = %e,
                "persisted feedback blob unreadable, starting empty"
            );
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<FeedbackRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    reason = ReasonCode::S001_ENTRY_SKIPPED.code(),
                    error = %e,
                    "skipping malformed feedback entry"
                );
                None
            }
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
