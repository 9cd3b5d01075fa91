use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::ExpenseRecord;

/// One display group: every record of a snapshot that happened on `day`.
#[derive(Debug, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub day: NaiveDate,
    /// Records of this day, in the order they appear in the input snapshot.
    /// The store prepends on create, so the most recently created record of
    /// a day comes first.
    pub items: Vec<&'a ExpenseRecord>,
}

impl DayBucket<'_> {
    /// Display title of this bucket relative to the caller-supplied `today`.
    pub fn title(&self, today: NaiveDate) -> String {
        day_title(self.day, today)
    }
}

/// Partitions a snapshot into per-day buckets, newest day first. Record order
/// within a bucket equals input order. An empty snapshot yields no buckets.
pub fn group_by_day(records: &[ExpenseRecord]) -> Vec<DayBucket<'_>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&ExpenseRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date).or_default().push(record);
    }
    // the map iterates oldest day first; display wants the reverse
    buckets.into_iter().rev().map(|(day, items)| DayBucket { day, items }).collect()
}

/// Title policy for a day bucket: the reference day itself is "Today", the
/// day right before it is "Yesterday", anything else is the long date, e.g.
/// "1 May 2024". `today` is supplied by the caller, so the policy carries no
/// wall-clock dependency.
pub fn day_title(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today".to_string()
    } else if day.succ_opt() == Some(today) {
        "Yesterday".to_string()
    } else {
        day.format("%-d %B %Y").to_string()
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use crate::data::{Amount, Category, ExpenseId};

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn gen_record(id: &str, date: NaiveDate) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            category: Category::Meals,
            amount: Amount::new(Decimal::new(1250, 2)).unwrap(),
            date,
            notes: format!("notes for {id}"),
        }
    }

    #[test]
    fn empty_snapshot_yields_no_buckets() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn single_record_yields_a_single_bucket() {
        let records = vec![gen_record("a", day(1))];
        let buckets = group_by_day(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day, day(1));
        assert_eq!(buckets[0].items, vec![&records[0]]);
    }

    #[test]
    fn same_day_records_keep_input_order() {
        // the store prepends on create, so creating a then b puts b first in
        // the raw order; the bucket must show b first too
        let records = vec![gen_record("b", day(1)), gen_record("a", day(1))];
        let buckets = group_by_day(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].items, vec![&records[0], &records[1]]);
    }

    #[test]
    fn buckets_are_ordered_newest_day_first() {
        let records = vec![
            gen_record("a", day(1)),
            gen_record("b", day(3)),
            gen_record("c", day(2)),
            gen_record("d", day(3)),
        ];
        let buckets = group_by_day(&records);
        let days: Vec<NaiveDate> = buckets.iter().map(|bucket| bucket.day).collect();
        assert_eq!(days, vec![day(3), day(2), day(1)]);
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket() {
        let records = vec![
            gen_record("a", day(1)),
            gen_record("b", day(3)),
            gen_record("c", day(2)),
            gen_record("d", day(3)),
            gen_record("e", day(1)),
        ];
        let buckets = group_by_day(&records);
        let total: usize = buckets.iter().map(|bucket| bucket.items.len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn titles_follow_the_relative_day_policy() {
        let today = day(15);
        assert_eq!(day_title(day(15), today), "Today");
        assert_eq!(day_title(day(14), today), "Yesterday");
        assert_eq!(day_title(day(13), today), "13 May 2024");
        assert_eq!(day_title(day(1), today), "1 May 2024");
        // a day after the reference is never "Today" or "Yesterday"
        assert_eq!(day_title(day(16), today), "16 May 2024");
    }

    #[test]
    fn yesterday_crosses_month_and_year_boundaries() {
        let mar_1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let feb_29 = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(day_title(feb_29, mar_1), "Yesterday");

        let jan_1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let dec_31 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(day_title(dec_31, jan_1), "Yesterday");
    }
}
