use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Contract for the durable key-value medium backing the ledger.
///
/// One well-known key holds the whole serialized collection; there are no
/// per-record keys. Implementations report failures through [`StorageError`]
/// instead of panicking.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// A failure reported by the storage backend.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("storage backend error: {0}")]
pub struct StorageError(String);

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        StorageError(message.into())
    }
}

// a backend can be shared by reference between the store and other consumers
impl<S: KeyValueStore> KeyValueStore for &S {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }
}

/// In-memory [`KeyValueStore`]: the reference backend, also used as the test
/// double for hosts that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}
