//! Error types raised by the calendar lookups.

use std::fmt;
use thiserror::Error;

/// Which code domain a lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Month,
    Season,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Month => write!(f, "month"),
            CodeKind::Season => write!(f, "season"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A month code outside 1–12 or a season code outside 1–4.
    #[error("invalid {kind} code: {code}")]
    InvalidCode { kind: CodeKind, code: u8 },
}
