use thiserror::Error;

use crate::data::ExpenseRecord;

/// The collection could not be serialized for storage.
#[derive(Debug, Error)]
#[error("failed to serialize ledger: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// The stored blob is not a well-formed ledger.
#[derive(Debug, Error)]
#[error("failed to parse stored ledger: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Serializes a collection to the durable string form: a JSON array of
/// records, dates as `YYYY-MM-DD`, amounts as decimal strings. Field order is
/// fixed by the record definition, so equal collections encode identically.
pub fn encode(records: &[ExpenseRecord]) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(records)?)
}

/// Parses the durable string form back into a collection. Fails on anything
/// malformed, including records whose amounts violate the amount invariants.
pub fn decode(payload: &str) -> Result<Vec<ExpenseRecord>, DecodeError> {
    Ok(serde_json::from_str(payload)?)
}
