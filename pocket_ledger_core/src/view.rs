pub mod breakdown;
pub mod groups;

pub use breakdown::{category_breakdown, CategoryTotal};
pub use groups::{day_title, group_by_day, DayBucket};
