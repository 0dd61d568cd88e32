//! Record selection by inclusive date range or by tracked year.
//!
//! Filters never fail: an inverted range or an unknown year simply selects
//! nothing. Relative order of the input is preserved.

use chrono::NaiveDate;
use tracing::debug;

use crate::records::RentalRecord;

/// A predicate over records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter {
    /// Inclusive `[start, end]`.
    DateRange { start: NaiveDate, end: NaiveDate },
    Year(u8),
}

impl RecordFilter {
    pub fn matches(&self, record: &RentalRecord) -> bool {
        match *self {
            RecordFilter::DateRange { start, end } => start <= record.date && record.date <= end,
            RecordFilter::Year(year_index) => record.year_index == year_index,
        }
    }

    pub fn apply(&self, records: &[RentalRecord]) -> Vec<RentalRecord> {
        let selected: Vec<RentalRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        debug!(
            filter = ?self,
            input = records.len(),
            selected = selected.len(),
            "Records filtered"
        );
        selected
    }
}

/// Returns the records dated within `[start, end]`. Empty when `start > end`.
pub fn filter_by_date_range(
    records: &[RentalRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<RentalRecord> {
    RecordFilter::DateRange { start, end }.apply(records)
}

/// Returns the records belonging to `year_index`.
pub fn filter_by_year(records: &[RentalRecord], year_index: u8) -> Vec<RentalRecord> {
    RecordFilter::Year(year_index).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<RentalRecord> {
        vec![
            RentalRecord::new(date(2011, 1, 3), 0, 1, 8, 1, 5),
            RentalRecord::new(date(2011, 1, 1), 0, 1, 9, 1, 6),
            RentalRecord::new(date(2012, 6, 1), 1, 6, 9, 2, 7),
            RentalRecord::new(date(2011, 1, 2), 0, 1, 10, 1, 8),
        ]
    }

    #[test]
    fn test_range_is_inclusive_and_keeps_order() {
        let out = filter_by_date_range(&sample(), date(2011, 1, 2), date(2011, 1, 3));
        let counts: Vec<u64> = out.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![5, 8]);
    }

    #[test]
    fn test_single_day_range() {
        let out = filter_by_date_range(&sample(), date(2011, 1, 1), date(2011, 1, 1));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].count, 6);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let out = filter_by_date_range(&sample(), date(2012, 1, 1), date(2011, 1, 1));
        assert!(out.is_empty());
    }

    #[test]
    fn test_range_with_no_matches() {
        let out = filter_by_date_range(&sample(), date(2013, 1, 1), date(2013, 12, 31));
        assert!(out.is_empty());
    }

    #[test]
    fn test_filter_by_year() {
        assert_eq!(filter_by_year(&sample(), 0).len(), 3);
        assert_eq!(filter_by_year(&sample(), 1).len(), 1);
        assert!(filter_by_year(&sample(), 2).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_year(&[], 0).is_empty());
    }
}
