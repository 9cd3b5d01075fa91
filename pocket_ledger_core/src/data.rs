pub mod amount;
pub mod category;
pub mod expense;
pub mod validation;

pub use amount::{Amount, AmountError};
pub use category::Category;
pub use expense::{ExpenseId, ExpenseRecord};
pub use validation::{validate, ValidationError, MAX_NOTES_CHARS};
