//! Group-and-sum over discrete time buckets.
//!
//! Every aggregator walks its input once, adding each record's count to a
//! running total for that record's key. Rows come out in key discovery order;
//! only keys seen in the input produce a row. Codes are not validated here.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

use crate::records::RentalRecord;

/// One grouping key with the summed count of its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateRow<K> {
    pub key: K,
    pub total: u64,
}

impl<K> AggregateRow<K> {
    pub fn new(key: K, total: u64) -> Self {
        Self { key, total }
    }
}

/// Sums `count` per distinct value of `key`, in first-seen order.
pub fn aggregate_by<K, F>(records: &[RentalRecord], key: F) -> Vec<AggregateRow<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&RentalRecord) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut rows: Vec<AggregateRow<K>> = Vec::new();

    for record in records {
        let k = key(record);
        match slots.get(&k) {
            Some(&i) => rows[i].total += record.count,
            None => {
                slots.insert(k.clone(), rows.len());
                rows.push(AggregateRow::new(k, record.count));
            }
        }
    }

    debug!(input = records.len(), buckets = rows.len(), "Records aggregated");
    rows
}

pub fn by_month(records: &[RentalRecord]) -> Vec<AggregateRow<u8>> {
    aggregate_by(records, |r| r.month)
}

pub fn by_hour(records: &[RentalRecord]) -> Vec<AggregateRow<u8>> {
    aggregate_by(records, |r| r.hour)
}

pub fn by_season(records: &[RentalRecord]) -> Vec<AggregateRow<u8>> {
    aggregate_by(records, |r| r.season)
}

pub fn by_year(records: &[RentalRecord]) -> Vec<AggregateRow<u8>> {
    aggregate_by(records, |r| r.year_index)
}

/// Keyed by `(year_index, month)`.
pub fn by_year_month(records: &[RentalRecord]) -> Vec<AggregateRow<(u8, u8)>> {
    aggregate_by(records, |r| (r.year_index, r.month))
}

/// Keyed by `(year_index, season)`.
pub fn by_year_season(records: &[RentalRecord]) -> Vec<AggregateRow<(u8, u8)>> {
    aggregate_by(records, |r| (r.year_index, r.season))
}

/// Sorts rows by their numeric key. Used for the hour-of-day view.
pub fn sort_by_key_asc<K: Ord>(rows: &mut [AggregateRow<K>]) {
    rows.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Returns the row with the largest total, preferring the earliest on ties.
pub fn peak<K: Clone>(rows: &[AggregateRow<K>]) -> Option<AggregateRow<K>> {
    rows.iter()
        .fold(None::<&AggregateRow<K>>, |best, row| match best {
            Some(b) if b.total >= row.total => Some(b),
            _ => Some(row),
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Month, label_months};
    use crate::filter::filter_by_year;
    use chrono::NaiveDate;

    fn rec(year_index: u8, month: u8, hour: u8, season: u8, count: u64) -> RentalRecord {
        let year = 2011 + year_index as i32;
        RentalRecord::new(
            NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap(),
            year_index,
            month,
            hour,
            season,
            count,
        )
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(by_month(&[]).is_empty());
        assert!(by_year_season(&[]).is_empty());
    }

    #[test]
    fn test_only_present_months_appear() {
        let records = vec![
            rec(0, 3, 0, 1, 30),
            rec(0, 1, 0, 1, 20),
            rec(0, 3, 1, 1, 40),
            rec(0, 1, 1, 1, 30),
        ];
        let rows = by_month(&records);
        assert_eq!(rows, vec![AggregateRow::new(3, 70), AggregateRow::new(1, 50)]);

        let labeled = label_months(rows).unwrap();
        assert_eq!(
            labeled,
            vec![
                AggregateRow::new(Month::Jan, 50),
                AggregateRow::new(Month::Mar, 70),
            ]
        );
    }

    #[test]
    fn test_two_key_grouping() {
        let records = vec![
            rec(0, 1, 0, 1, 1),
            rec(1, 1, 0, 1, 2),
            rec(0, 4, 0, 2, 3),
            rec(0, 2, 0, 1, 4),
        ];
        let rows = by_year_season(&records);
        assert_eq!(
            rows,
            vec![
                AggregateRow::new((0, 1), 5),
                AggregateRow::new((1, 1), 2),
                AggregateRow::new((0, 2), 3),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_summed() {
        let records = vec![rec(0, 1, 7, 1, 10), rec(0, 1, 7, 1, 10)];
        assert_eq!(by_hour(&records), vec![AggregateRow::new(7, 20)]);
    }

    #[test]
    fn test_aggregation_distributes_over_year_partition() {
        let records = vec![
            rec(0, 1, 0, 1, 10),
            rec(1, 1, 0, 1, 15),
            rec(0, 2, 0, 1, 5),
            rec(1, 5, 0, 2, 9),
            rec(1, 2, 3, 1, 1),
        ];
        let whole = by_month(&records);
        let y0 = by_month(&filter_by_year(&records, 0));
        let y1 = by_month(&filter_by_year(&records, 1));

        for row in &whole {
            let part = |rows: &[AggregateRow<u8>]| {
                rows.iter()
                    .find(|r| r.key == row.key)
                    .map_or(0, |r| r.total)
            };
            assert_eq!(row.total, part(y0.as_slice()) + part(y1.as_slice()));
        }
    }

    #[test]
    fn test_by_year_totals() {
        let records = vec![rec(1, 1, 0, 1, 15), rec(0, 1, 0, 1, 10), rec(1, 6, 0, 2, 5)];
        assert_eq!(
            by_year(&records),
            vec![AggregateRow::new(1, 20), AggregateRow::new(0, 10)]
        );
    }

    #[test]
    fn test_rerun_is_identical() {
        let records = vec![rec(0, 9, 1, 3, 4), rec(0, 2, 2, 1, 5), rec(0, 9, 3, 3, 6)];
        assert_eq!(by_month(&records), by_month(&records));
    }

    #[test]
    fn test_peak_prefers_first_on_tie() {
        let mut rows = vec![
            AggregateRow::new(17u8, 90),
            AggregateRow::new(8u8, 90),
            AggregateRow::new(3u8, 10),
        ];
        sort_by_key_asc(&mut rows);
        assert_eq!(peak(&rows), Some(AggregateRow::new(8, 90)));
        assert_eq!(peak::<u8>(&[]), None);
    }
}
