use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{amount::Amount, category::Category};

/// A unique ID referring to one expense record.
///
/// Ids are opaque strings assigned by whoever creates the record; the store
/// never generates or rewrites them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        ExpenseId(id.into())
    }

    /// Mints a fresh id for a record about to be created.
    pub fn generate() -> Self {
        ExpenseId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One expense entry in the ledger.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ExpenseRecord {
    /// Unique across the collection; immutable after creation.
    pub id: ExpenseId,
    pub category: Category,
    pub amount: Amount,
    /// The calendar day the expense happened. Day granularity only; grouping
    /// relies on exact day equality.
    pub date: NaiveDate,
    /// Free-text annotation. The form layer guarantees it is non-empty and
    /// at most 100 characters before the record reaches the store.
    pub notes: String,
}
