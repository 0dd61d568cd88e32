use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::aggregate::AggregateRow;
use crate::records::RentalRecord;

/// Resamples hourly records into daily totals, sorted ascending by date.
///
/// Input order does not matter. Days with no records produce no row.
pub fn daily_totals(records: &[RentalRecord]) -> Vec<AggregateRow<NaiveDate>> {
    let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *days.entry(record.date).or_default() += record.count;
    }

    debug!(input = records.len(), days = days.len(), "Records resampled to days");
    days.into_iter()
        .map(|(date, total)| AggregateRow::new(date, total))
        .collect()
}
