pub mod aggregate;
pub mod calendar;
pub mod compare;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod records;
pub mod resample;
pub mod summary;

pub use aggregate::AggregateRow;
pub use calendar::{Month, Season};
pub use compare::YearRow;
pub use error::CalendarError;
pub use records::{RecordStore, RentalRecord};
