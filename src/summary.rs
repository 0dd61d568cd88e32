//! The combined per-year dashboard view.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::aggregate::{AggregateRow, by_hour, by_month, peak, sort_by_key_asc};
use crate::calendar::{Month, label_months};
use crate::error::CalendarError;
use crate::filter::filter_by_year;
use crate::records::{RecordStore, total_count};

/// Everything the dashboard shows for one selected calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub total_rentals: u64,
    /// Selected year only, calendar order.
    pub monthly: Vec<AggregateRow<Month>>,
    /// All years, hour ascending.
    pub hourly: Vec<AggregateRow<u8>>,
    pub peak_hour: Option<AggregateRow<u8>>,
}

/// Maps a calendar year to its `year_index`, if it is one of the two tracked years.
pub fn year_index_for(year: i32, base_year: i32) -> Option<u8> {
    match year - base_year {
        0 => Some(0),
        1 => Some(1),
        _ => None,
    }
}

/// Hour-of-day totals sorted by hour.
pub fn hourly_totals(store: &RecordStore) -> Vec<AggregateRow<u8>> {
    let mut rows = by_hour(store.records());
    sort_by_key_asc(&mut rows);
    rows
}

/// Builds the summary for `year`. An untracked year gives zero totals and an
/// empty monthly view; the hourly view always covers the whole store.
#[instrument(skip(store), fields(records = store.len()))]
pub fn year_summary(
    store: &RecordStore,
    year: i32,
    base_year: i32,
) -> Result<YearSummary, CalendarError> {
    let selected = match year_index_for(year, base_year) {
        Some(year_index) => filter_by_year(store.records(), year_index),
        None => Vec::new(),
    };

    let monthly = label_months(by_month(&selected))?;
    let hourly = hourly_totals(store);
    let peak_hour = peak(&hourly);

    debug!(
        selected = selected.len(),
        months = monthly.len(),
        "Year summary built"
    );

    Ok(YearSummary {
        year,
        total_rentals: total_count(&selected),
        monthly,
        hourly,
        peak_hour,
    })
}
