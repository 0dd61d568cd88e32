//! Hourly rental observations and the in-memory store that holds them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single hourly observation, deserialized from one row of the hourly CSV.
///
/// Well-formed input holds exactly one record per `(date, hour)` pair. This is
/// not enforced: duplicate pairs are summed by every aggregator like any other
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    /// 0 for the first tracked year, 1 for the second.
    #[serde(rename = "yr")]
    pub year_index: u8,
    #[serde(rename = "mnth")]
    pub month: u8,
    #[serde(rename = "hr")]
    pub hour: u8,
    pub season: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
}

impl RentalRecord {
    pub fn new(
        date: NaiveDate,
        year_index: u8,
        month: u8,
        hour: u8,
        season: u8,
        count: u64,
    ) -> Self {
        Self {
            date,
            year_index,
            month,
            hour,
            season,
            count,
        }
    }
}

/// Immutable set of parsed records, owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<RentalRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<RentalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `count` over every record in the store.
    pub fn total(&self) -> u64 {
        total_count(&self.records)
    }
}

/// Sums the `count` field of a record slice. Returns 0 for empty input.
pub fn total_count(records: &[RentalRecord]) -> u64 {
    records.iter().map(|r| r.count).sum()
}
