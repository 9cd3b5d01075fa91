use chrono::NaiveDate;
use thiserror::Error;

use super::expense::ExpenseRecord;

/// Upper bound on the length of a record's notes, in characters.
pub const MAX_NOTES_CHARS: usize = 100;

/// A form-level rule the record failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("notes must not be empty")]
    EmptyNotes,
    #[error("notes must be at most {} characters", MAX_NOTES_CHARS)]
    NotesTooLong,
    #[error("date must not be after {today}")]
    DateAfterToday { today: NaiveDate },
}

/// Checks the form-level rules for a record against a caller-supplied
/// reference day. The store itself trusts its inputs; the form collaborator
/// runs this before handing a record over.
///
/// Amount and category rules need no checking here: [`super::Amount`] and
/// [`super::Category`] cannot hold an invalid value in the first place.
pub fn validate(record: &ExpenseRecord, today: NaiveDate) -> Result<(), ValidationError> {
    if record.notes.trim().is_empty() {
        return Err(ValidationError::EmptyNotes);
    }
    if record.notes.chars().count() > MAX_NOTES_CHARS {
        return Err(ValidationError::NotesTooLong);
    }
    if record.date > today {
        return Err(ValidationError::DateAfterToday { today });
    }
    Ok(())
}
