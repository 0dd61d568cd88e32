//! Month and season labels with their fixed calendar ranks.
//!
//! Codes are only validated here, when converting to a display label. Sorting
//! goes through [`CalendarOrder::rank`], never through label text or the order
//! in which keys were discovered.

use serde::Serialize;

use crate::aggregate::AggregateRow;
use crate::error::{CalendarError, CodeKind};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const SEASON_LABELS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

/// Keys with a fixed position in the calendar.
pub trait CalendarOrder {
    /// 1-based position: 1–12 for months, 1–4 for seasons.
    fn rank(&self) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn from_code(code: u8) -> Result<Self, CalendarError> {
        match code {
            1..=12 => Ok(Self::ALL[code as usize - 1]),
            _ => Err(CalendarError::InvalidCode {
                kind: CodeKind::Month,
                code,
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        MONTH_LABELS[self.rank() as usize - 1]
    }
}

impl CalendarOrder for Month {
    fn rank(&self) -> u8 {
        *self as u8 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn from_code(code: u8) -> Result<Self, CalendarError> {
        match code {
            1..=4 => Ok(Self::ALL[code as usize - 1]),
            _ => Err(CalendarError::InvalidCode {
                kind: CodeKind::Season,
                code,
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        SEASON_LABELS[self.rank() as usize - 1]
    }
}

impl CalendarOrder for Season {
    fn rank(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Maps a month code (1–12) to its short label.
pub fn month_label(code: u8) -> Result<&'static str, CalendarError> {
    Month::from_code(code).map(|m| m.label())
}

/// Maps a season code (1–4) to its label.
pub fn season_label(code: u8) -> Result<&'static str, CalendarError> {
    Season::from_code(code).map(|s| s.label())
}

/// Calendar rank of a month label, or `None` for an unknown label.
pub fn month_rank(label: &str) -> Option<u8> {
    MONTH_LABELS
        .iter()
        .position(|l| *l == label)
        .map(|i| i as u8 + 1)
}

/// Calendar rank of a season label, or `None` for an unknown label.
pub fn season_rank(label: &str) -> Option<u8> {
    SEASON_LABELS
        .iter()
        .position(|l| *l == label)
        .map(|i| i as u8 + 1)
}

/// Stable sort into calendar order. Rows sharing a key keep their input order.
pub fn sort_calendar<K: CalendarOrder>(rows: &mut [AggregateRow<K>]) {
    rows.sort_by_key(|r| r.key.rank());
}

/// Converts month-coded rows to labeled rows in calendar order.
pub fn label_months(rows: Vec<AggregateRow<u8>>) -> Result<Vec<AggregateRow<Month>>, CalendarError> {
    let mut labeled = rows
        .into_iter()
        .map(|r| Month::from_code(r.key).map(|m| AggregateRow::new(m, r.total)))
        .collect::<Result<Vec<_>, CalendarError>>()?;
    sort_calendar(&mut labeled);
    Ok(labeled)
}

/// Converts season-coded rows to labeled rows in calendar order.
pub fn label_seasons(
    rows: Vec<AggregateRow<u8>>,
) -> Result<Vec<AggregateRow<Season>>, CalendarError> {
    let mut labeled = rows
        .into_iter()
        .map(|r| Season::from_code(r.key).map(|s| AggregateRow::new(s, r.total)))
        .collect::<Result<Vec<_>, CalendarError>>()?;
    sort_calendar(&mut labeled);
    Ok(labeled)
}
