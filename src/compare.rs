//! Year-over-year joins for trend views.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::AggregateRow;
use crate::calendar::CalendarOrder;
use crate::filter::filter_by_year;
use crate::records::RentalRecord;

/// One key's total within one tracked year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRow<K> {
    pub key: K,
    pub year_index: u8,
    pub total: u64,
}

impl<K> YearRow<K> {
    pub fn new(key: K, year_index: u8, total: u64) -> Self {
        Self {
            key,
            year_index,
            total,
        }
    }
}

/// Aggregate rows tagged with the year they were computed for.
#[derive(Debug, Clone)]
pub struct YearRows<K> {
    pub year_index: u8,
    pub rows: Vec<AggregateRow<K>>,
}

impl<K> YearRows<K> {
    pub fn new(year_index: u8, rows: Vec<AggregateRow<K>>) -> Self {
        Self { year_index, rows }
    }
}

/// Merges two per-year row sets into one sequence ordered by calendar rank,
/// then by `year_index`.
///
/// A key reported by only one year appears only for that year.
pub fn join_years<K: CalendarOrder>(first: YearRows<K>, second: YearRows<K>) -> Vec<YearRow<K>> {
    let mut joined: Vec<YearRow<K>> = [first, second]
        .into_iter()
        .flat_map(|tagged| {
            let year_index = tagged.year_index;
            tagged
                .rows
                .into_iter()
                .map(move |r| YearRow::new(r.key, year_index, r.total))
        })
        .collect();
    joined.sort_by_key(|r| (r.key.rank(), r.year_index));
    joined
}

/// Runs `aggregate` on each year's subset and joins the results.
pub fn compare_years<K, E, F>(
    records: &[RentalRecord],
    years: (u8, u8),
    aggregate: F,
) -> Result<Vec<YearRow<K>>, E>
where
    K: CalendarOrder,
    F: Fn(&[RentalRecord]) -> Result<Vec<AggregateRow<K>>, E>,
{
    let (a, b) = years;
    let first = YearRows::new(a, aggregate(&filter_by_year(records, a))?);
    let second = YearRows::new(b, aggregate(&filter_by_year(records, b))?);
    debug!(
        first_year = a,
        first_rows = first.rows.len(),
        second_year = b,
        second_rows = second.rows.len(),
        "Joining year aggregates"
    );
    Ok(join_years(first, second))
}

/// Reshapes rows keyed by `(year_index, key)` into year rows in calendar order.
pub fn split_year_keys<K: CalendarOrder>(rows: Vec<AggregateRow<(u8, K)>>) -> Vec<YearRow<K>> {
    let mut out: Vec<YearRow<K>> = rows
        .into_iter()
        .map(|r| YearRow::new(r.key.1, r.key.0, r.total))
        .collect();
    out.sort_by_key(|r| (r.key.rank(), r.year_index));
    out
}
