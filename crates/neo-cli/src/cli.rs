//! CLI argument parsing for neo-explorer.
//!
//! CLI flags override all other config sources.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use neo_search::ReturnObject;

use crate::writer::OutputFormat;

/// Near-Earth Object Explorer
///
/// Search close approaches of near-Earth objects by date and attributes.
#[derive(Parser, Debug)]
#[command(name = "neo-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/neo-explorer/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Override the close-approach data file
    #[arg(long, global = true)]
    pub data_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Explorer commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search close approaches by date and filters
    Query(QueryArgs),

    /// Show statistics about the data file
    Info,
}

/// Options for the `query` command
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Exact close-approach date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Start of an inclusive date range (YYYY-MM-DD); needs --end-date
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End of an inclusive date range (YYYY-MM-DD); needs --start-date
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Return whole objects (NEO) or individual close approaches (Path)
    #[arg(short, long, default_value = "NEO")]
    pub return_object: ReturnObject,

    /// Maximum number of results (default from config)
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Filter as field:operator:value, e.g. distance:<=:1000 (repeatable)
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "display")]
    pub output: OutputFormat,

    /// File name for csv_file output (default neo.csv or orbit.csv)
    #[arg(long)]
    pub filename: Option<String>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
