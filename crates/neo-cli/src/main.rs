//! Near-Earth Object Explorer
//!
//! Search close approaches of near-Earth objects by date and attributes.
//!
//! # Usage
//!
//! ```bash
//! neo-explorer query --start-date 2020-01-01 --end-date 2020-01-31 \
//!     --filter distance:<=:1000 --return-object Path --number 5
//! neo-explorer query --date 2020-01-01 --output csv_file --filename jan1.csv
//! neo-explorer info
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/neo-explorer/config.toml)
//! 3. Environment variables (NEO_*)
//! 4. CLI flags

use std::io;

use anyhow::Result;
use clap::Parser;

use neo_cli::{init_logging, load_settings, run_query, show_info, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(
        cli.config.as_deref(),
        cli.log_level.as_deref(),
        cli.data_path.as_deref(),
    )?;
    init_logging(&settings.log_level)?;

    let stdout = io::stdout();
    let mut console = stdout.lock();

    match cli.command {
        Commands::Query(args) => {
            run_query(&settings, &args, &mut console)?;
        }
        Commands::Info => {
            show_info(&settings, &mut console)?;
        }
    }

    Ok(())
}
