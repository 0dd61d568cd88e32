//! Loads the hourly bike-sharing CSV into a [`RecordStore`].
//!
//! Only the columns the engine uses are read; the rest of the row is ignored.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::records::{RecordStore, RentalRecord};

/// Reads every record from a CSV file with a header row.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row fails to parse.
pub fn load_csv(path: impl AsRef<Path>) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let store =
        load_from_reader(file).with_context(|| format!("Failed to load {}", path.display()))?;
    info!(path = %path.display(), records = store.len(), "Rental records loaded");
    Ok(store)
}

/// Reads every record from CSV text supplied by `reader`.
pub fn load_from_reader<R: Read>(reader: R) -> Result<RecordStore> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // header is line 1
        let record: RentalRecord = result.with_context(|| format!("Invalid row at line {}", i + 2))?;
        records.push(record);
    }

    debug!(records = records.len(), "CSV rows parsed");
    Ok(RecordStore::from_records(records))
}
