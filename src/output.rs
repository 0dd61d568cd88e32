//! Output formatting and persistence for summary views.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::debug;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl std::fmt::Debug) {
    debug!("{:#?}", value);
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes rows as CSV with a header derived from the row's field names.
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes rows to a CSV file, replacing any existing file at `path`.
pub fn save_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing CSV");
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    write_csv(file, rows)
}

/// Writes `value` as JSON to a file, replacing any existing file at `path`.
pub fn save_json(path: &str, value: &impl Serialize) -> Result<()> {
    debug!(path, "Writing JSON");
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    write_json(file, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AggregateRow;
    use crate::calendar::Month;
    use crate::compare::YearRow;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&AggregateRow::new(Month::Jan, 1));
    }

    #[test]
    fn test_csv_header_and_rows() {
        let rows = vec![AggregateRow::new(0u8, 16), AggregateRow::new(1u8, 40)];
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "key,total\n0,16\n1,40\n");
    }

    #[test]
    fn test_csv_year_rows() {
        let rows = vec![YearRow::new(Month::Jan, 0, 100), YearRow::new(Month::Jan, 1, 120)];
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "key,year_index,total\nJan,0,100\nJan,1,120\n"
        );
    }

    #[test]
    fn test_json_dates_are_iso() {
        let rows = vec![AggregateRow::new(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(), 240)];
        let mut buf = Vec::new();
        write_json(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"2011-01-01\""));
        assert!(text.contains("240"));
    }

    #[test]
    fn test_empty_rows_write_nothing() {
        let rows: Vec<AggregateRow<u8>> = Vec::new();
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_save_csv_replaces_file() {
        let path = temp_path("rental_trends_test_save.csv");
        let _ = fs::remove_file(&path);

        save_csv(&path, &[AggregateRow::new(3u8, 7)]).unwrap();
        save_csv(&path, &[AggregateRow::new(4u8, 8)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "key,total\n4,8\n");

        fs::remove_file(&path).unwrap();
    }
}
