use tracing::{debug, warn};

use crate::data::{ExpenseId, ExpenseRecord};

use super::{codec, kv::KeyValueStore, LoadError, PersistenceError, StoreError, LEDGER_KEY};

/// Owns the canonical in-memory expense collection for a session and keeps it
/// consistent with one durable blob.
///
/// The store expects a single logical thread of control: one UI event at a
/// time issues reads and mutations. Every mutation rewrites the full
/// collection, so each durable write is a complete, self-consistent snapshot
/// and overlapping writes are safe to let race: last write wins. Reads never
/// touch storage after [`LedgerStore::load`] has completed once.
pub struct LedgerStore<S> {
    storage: S,
    key: String,
    records: Vec<ExpenseRecord>,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Creates a store over `storage` using the well-known ledger key. The
    /// collection starts empty; call [`LedgerStore::load`] before the first
    /// read.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, LEDGER_KEY)
    }

    /// Same as [`LedgerStore::new`] with an explicit storage key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        LedgerStore { storage, key: key.into(), records: Vec::new() }
    }

    /// Reads the durable blob and replaces the in-memory collection with its
    /// contents. Invoked once at process start.
    ///
    /// A missing blob means a first run and an empty collection. A blob that
    /// fails to decode is reported and left in storage untouched; the
    /// collection stays empty, and the caller decides whether to abort or
    /// carry on. Carrying on means the next successful mutation overwrites
    /// the unreadable blob.
    pub async fn load(&mut self) -> Result<(), LoadError> {
        let Some(payload) = self.storage.get(&self.key).await? else {
            debug!(key = %self.key, "no stored ledger, starting empty");
            self.records = Vec::new();
            return Ok(());
        };
        match codec::decode(&payload) {
            Ok(records) => {
                debug!(records = records.len(), "loaded ledger");
                self.records = records;
                Ok(())
            }
            Err(err) => {
                warn!(key = %self.key, %err, "stored ledger is unreadable");
                Err(err.into())
            }
        }
    }

    /// Adds a new record to the front of the collection and persists.
    ///
    /// Callers mint fresh ids, but the uniqueness invariant is checked here
    /// regardless; a colliding id is rejected without touching anything. On a
    /// persistence failure the record stays in the collection (in-memory
    /// state wins) and the caller may retry via [`LedgerStore::persist`].
    pub async fn create(&mut self, record: ExpenseRecord) -> Result<(), StoreError> {
        if self.position(&record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }
        // newest creation first, for consumers reading the raw order
        self.records.insert(0, record);
        self.persist().await?;
        Ok(())
    }

    /// Replaces the record carrying the same id, keeping its position, and
    /// persists. An id not in the collection is an error; the collection is
    /// unchanged and nothing is written.
    pub async fn update(&mut self, record: ExpenseRecord) -> Result<(), StoreError> {
        let Some(index) = self.position(&record.id) else {
            return Err(StoreError::NotFound(record.id));
        };
        self.records[index] = record;
        self.persist().await?;
        Ok(())
    }

    /// Removes the record with the given id, if any, and persists. Deleting
    /// an absent id is not an error; the unchanged collection is persisted
    /// all the same.
    pub async fn delete(&mut self, id: &ExpenseId) -> Result<(), StoreError> {
        self.records.retain(|record| &record.id != id);
        self.persist().await?;
        Ok(())
    }

    /// The current collection, newest-created first. Read-only; mutation goes
    /// through create, update, and delete.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Writes the full current collection to durable storage. Every mutation
    /// calls this; it is public so a caller can retry after a reported
    /// persistence failure.
    pub async fn persist(&self) -> Result<(), PersistenceError> {
        let payload = codec::encode(&self.records)?;
        self.storage.set(&self.key, payload).await?;
        debug!(records = self.records.len(), "persisted ledger");
        Ok(())
    }

    fn position(&self, id: &ExpenseId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}
