use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::data::{Category, ExpenseRecord};

/// Per-category slice of the breakdown.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CategoryTotal {
    /// Sum of the amounts of every record in the category.
    pub sum: Decimal,
    /// This category's share of the grand total, in percent, rounded to one
    /// decimal place.
    pub percent: Decimal,
}

/// Sums a snapshot per category and derives each category's share of the
/// grand total. A zero total (only possible for the empty snapshot, since
/// amounts are strictly positive) yields an empty map rather than a division
/// by zero.
///
/// The per-category sums add up to the grand total exactly; only the
/// percentages are rounded.
pub fn category_breakdown(records: &[ExpenseRecord]) -> HashMap<Category, CategoryTotal> {
    let mut sums: HashMap<Category, Decimal> = HashMap::new();
    let mut total = Decimal::ZERO;
    for record in records {
        *sums.entry(record.category).or_insert(Decimal::ZERO) += record.amount.value();
        total += record.amount.value();
    }
    if total.is_zero() {
        return HashMap::new();
    }

    sums.into_iter()
        .map(|(category, sum)| {
            let percent = (sum * Decimal::ONE_HUNDRED / total)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            (category, CategoryTotal { sum, percent })
        })
        .collect()
}
