//! Key-value persistence.
//!
//! # Responsibilities
//! - Stand in for `localStorage` / `sessionStorage`
//! - Persist opaque string values under string keys
//!
//! # Design Decisions
//! - `MemoryStore` is the session analog: per-process, gone on drop
//! - `FileStore` is the local analog: a JSON map rewritten on every mutation
//!   (write volume here is a handful of keys, not a hot path)
//! - Writers treat store errors as environment failures: logged by the
//!   caller, never fatal to the page

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key-value storage with the shape of web storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Session-storage analog: lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.map.lock().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed store. Local-storage analog: a single JSON object on disk,
/// loaded at open and rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) a store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let map = if Path::new(&path).exists() {
            let file = File::open(&path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)?
        } else {
            HashMap::new()
        };
        tracing::debug!(path = %path.display(), entries = map.len(), "Opened file store");
        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    fn persist(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, map)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().unwrap();
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().unwrap();
        map.remove(key);
        self.persist(&map)
    }
}
