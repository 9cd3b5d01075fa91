use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of expense categories. A record always carries one of these
/// keys; there are no free-form categories.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Category {
    Meals,
    Transportation,
    Groceries,
    Utilities,
    Healthcare,
    Entertainment,
    PersonalCare,
    Miscellaneous,
}

impl Category {
    /// Every category, in the order pickers and chart legends present them.
    pub const ALL: [Category; 8] = [
        Category::Meals,
        Category::Transportation,
        Category::Groceries,
        Category::Utilities,
        Category::Healthcare,
        Category::Entertainment,
        Category::PersonalCare,
        Category::Miscellaneous,
    ];

    /// Human-readable label, e.g. "Personal Care" for `PersonalCare`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Meals => "Meals",
            Category::Transportation => "Transportation",
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Entertainment => "Entertainment",
            Category::PersonalCare => "Personal Care",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
