//! Runtime settings read from the environment (after `.env` is loaded).

use anyhow::{Context, Result};

pub const DEFAULT_DATA_PATH: &str = "hour.csv";
pub const DEFAULT_BASE_YEAR: i32 = 2011;
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/rental_trends.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Hourly CSV to load.
    pub data_path: String,
    /// Calendar year of `year_index` 0.
    pub base_year: i32,
    pub log_file_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            base_year: DEFAULT_BASE_YEAR,
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}

impl Settings {
    /// Reads `RENTALS_DATA_PATH`, `RENTALS_BASE_YEAR` and `LOG_FILE_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let base_year = match lookup("RENTALS_BASE_YEAR") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RENTALS_BASE_YEAR is not a year: '{raw}'"))?,
            None => defaults.base_year,
        };

        Ok(Self {
            data_path: lookup("RENTALS_DATA_PATH").unwrap_or(defaults.data_path),
            base_year,
            log_file_path: lookup("LOG_FILE_PATH").unwrap_or(defaults.log_file_path),
        })
    }
}
