//! Command implementations for neo-explorer.
//!
//! Handles:
//! - query: Load data, run the search, write results
//! - info: Load data and print store statistics

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use neo_search::{ComparisonMode, NeoSearcher, Query};
use neo_storage::NeoDatabase;
use neo_types::{Settings, DATE_FORMAT};

use crate::cli::QueryArgs;
use crate::writer::NeoWriter;

/// Load configuration (defaults -> file -> env) and apply CLI overrides.
pub fn load_settings(
    config_path: Option<&str>,
    log_level_override: Option<&str>,
    data_path_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    if let Some(data_path) = data_path_override {
        settings.data_path = data_path.to_string();
    }
    settings.validate().context("Invalid configuration")?;

    Ok(settings)
}

/// Install the global tracing subscriber. Logs go to stderr.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Open and load the configured data file.
pub fn open_database(settings: &Settings) -> Result<NeoDatabase> {
    let mut db = NeoDatabase::new(Some(settings.data_file()));
    db.load_data(None)
        .with_context(|| format!("Failed to load data from {}", settings.data_path))?;
    Ok(db)
}

/// Translate `query` options into a search over `db` and write the results.
pub fn execute_query<W: Write>(
    settings: &Settings,
    db: &NeoDatabase,
    args: &QueryArgs,
    console: &mut W,
) -> Result<bool> {
    let query = Query {
        start_date: args.start_date,
        end_date: args.end_date,
        date: args.date,
        return_object: Some(args.return_object),
        number: Some(args.number.unwrap_or(settings.default_number)),
        filters: args.filters.clone(),
    };
    let selectors = query.build_query().context("Invalid query")?;

    let mode = if settings.strict_comparisons {
        ComparisonMode::Strict
    } else {
        ComparisonMode::Inclusive
    };
    let results = NeoSearcher::new(db)
        .with_comparison_mode(mode)
        .get_objects(&selectors)
        .context("Search failed")?;

    info!(output = args.output.as_str(), "Writing results");
    let writer = NeoWriter::new(settings.output_path());
    let written = writer
        .write(args.output, &results, args.filename.as_deref(), console)
        .context("Failed to write results")?;
    Ok(written)
}

/// Handle the `query` command.
pub fn run_query<W: Write>(settings: &Settings, args: &QueryArgs, console: &mut W) -> Result<bool> {
    let db = open_database(settings)?;
    execute_query(settings, &db, args, console)
}

/// Handle the `info` command.
pub fn show_info<W: Write>(settings: &Settings, console: &mut W) -> Result<()> {
    let db = open_database(settings)?;
    let stats = db.stats();
    let format_date = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    writeln!(console, "Data file: {}", settings.data_path)?;
    writeln!(console, "Near-Earth objects: {}", stats.neo_count)?;
    writeln!(console, "Close approaches: {}", stats.orbit_count)?;
    writeln!(console, "First approach: {}", format_date(stats.first_date))?;
    writeln!(console, "Last approach: {}", format_date(stats.last_date))?;
    Ok(())
}
