use thiserror::Error;

use crate::data::ExpenseId;

pub mod codec;
pub mod kv;
mod ledger;

pub use codec::{decode, encode, DecodeError, EncodeError};
pub use kv::{KeyValueStore, MemoryStore, StorageError};
pub use ledger::LedgerStore;

/// The well-known storage key under which the whole collection lives.
pub const LEDGER_KEY: &str = "pocket_ledger_expenses";

/// Failure to bring the ledger up from durable storage.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure to push the current collection down to durable storage.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Outcome of a mutating store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A create collided with an id already in the collection.
    #[error("a record with id `{0}` already exists")]
    DuplicateId(ExpenseId),
    /// An update targeted an id not in the collection.
    #[error("no record with id `{0}` exists")]
    NotFound(ExpenseId),
    /// The mutation was applied in memory but could not be made durable.
    #[error("ledger mutation applied but not persisted: {0}")]
    Persistence(#[from] PersistenceError),
}
