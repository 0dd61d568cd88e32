//! CLI entry point for the rental trends tool.
//!
//! Loads the hourly rentals CSV and prints one summary view per invocation
//! as JSON or CSV.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rental_trends::{
    RecordStore, RentalRecord,
    aggregate::{by_hour, by_month, by_season, sort_by_key_asc},
    calendar::{label_months, label_seasons},
    compare::compare_years,
    config::Settings,
    filter::{filter_by_date_range, filter_by_year},
    loader::load_csv,
    output::{print_pretty, save_csv, save_json, write_csv, write_json},
    resample::daily_totals,
    summary::{year_index_for, year_summary},
};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "rental_trends")]
#[command(about = "Summaries of hourly bike rental counts", long_about = None)]
struct Cli {
    /// Hourly rentals CSV (defaults to RENTALS_DATA_PATH or hour.csv)
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// File to write to instead of stdout
    #[arg(short, long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum TrendKey {
    Month,
    Season,
}

#[derive(Subcommand)]
enum Commands {
    /// Year total, monthly totals, hourly totals and peak hour
    Summary {
        /// Calendar year to summarize
        #[arg(short, long)]
        year: i32,
    },
    /// Daily totals over an inclusive date range
    Daily {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Totals per month in calendar order
    Monthly {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Totals per hour of day
    Hourly {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Totals per season in calendar order
    Seasonal {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Year-over-year comparison of both tracked years
    Trend {
        #[arg(short, long, value_enum, default_value_t = TrendKey::Month)]
        by: TrendKey,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env()?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&settings.log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&settings.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("rental_trends.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let data_path = cli.data.clone().unwrap_or(settings.data_path.clone());
    let store = load_csv(&data_path)?;
    let base_year = settings.base_year;

    match cli.command {
        Commands::Summary { year } => {
            if matches!(cli.format, Format::Csv) {
                bail!("summary is only available as JSON");
            }
            let summary = year_summary(&store, year, base_year)?;
            print_pretty(&summary);
            info!(
                year,
                total_rentals = summary.total_rentals,
                peak_hour = summary.peak_hour.as_ref().map(|p| p.key),
                "Summary computed"
            );
            emit_value(cli.output.as_deref(), &summary)?;
        }
        Commands::Daily { from, to } => {
            let records = match (from, to) {
                (None, None) => store.records().to_vec(),
                (from, to) => filter_by_date_range(
                    store.records(),
                    from.unwrap_or(NaiveDate::MIN),
                    to.unwrap_or(NaiveDate::MAX),
                ),
            };
            let rows = daily_totals(&records);
            info!(days = rows.len(), "Daily totals computed");
            emit_rows(cli.format, cli.output.as_deref(), &rows)?;
        }
        Commands::Monthly { year } => {
            let records = select_year(&store, year, base_year);
            let rows = label_months(by_month(&records))?;
            info!(months = rows.len(), "Monthly totals computed");
            emit_rows(cli.format, cli.output.as_deref(), &rows)?;
        }
        Commands::Hourly { year } => {
            let records = select_year(&store, year, base_year);
            let mut rows = by_hour(&records);
            sort_by_key_asc(&mut rows);
            info!(hours = rows.len(), "Hourly totals computed");
            emit_rows(cli.format, cli.output.as_deref(), &rows)?;
        }
        Commands::Seasonal { year } => {
            let records = select_year(&store, year, base_year);
            let rows = label_seasons(by_season(&records))?;
            info!(seasons = rows.len(), "Seasonal totals computed");
            emit_rows(cli.format, cli.output.as_deref(), &rows)?;
        }
        Commands::Trend { by } => match by {
            TrendKey::Month => {
                let rows = compare_years(store.records(), (0, 1), |subset| {
                    label_months(by_month(subset))
                })?;
                info!(rows = rows.len(), "Monthly trend computed");
                emit_rows(cli.format, cli.output.as_deref(), &rows)?;
            }
            TrendKey::Season => {
                let rows = compare_years(store.records(), (0, 1), |subset| {
                    label_seasons(by_season(subset))
                })?;
                info!(rows = rows.len(), "Seasonal trend computed");
                emit_rows(cli.format, cli.output.as_deref(), &rows)?;
            }
        },
    }

    Ok(())
}

/// Records for `year`, or the whole store when no year is given.
fn select_year(store: &RecordStore, year: Option<i32>, base_year: i32) -> Vec<RentalRecord> {
    match year {
        None => store.records().to_vec(),
        Some(year) => match year_index_for(year, base_year) {
            Some(year_index) => filter_by_year(store.records(), year_index),
            None => {
                info!(year, base_year, "Year is not tracked, selection is empty");
                Vec::new()
            }
        },
    }
}

fn emit_rows<T: Serialize>(format: Format, output: Option<&str>, rows: &[T]) -> Result<()> {
    match (format, output) {
        (Format::Json, Some(path)) => save_json(path, &rows),
        (Format::Json, None) => write_json(std::io::stdout().lock(), &rows),
        (Format::Csv, Some(path)) => save_csv(path, rows),
        (Format::Csv, None) => write_csv(std::io::stdout().lock(), rows),
    }
}

fn emit_value(output: Option<&str>, value: &impl Serialize) -> Result<()> {
    match output {
        Some(path) => save_json(path, value),
        None => write_json(std::io::stdout().lock(), value),
    }
}
