//! neo-explorer library exports.
//!
//! This crate provides the command-line binary for the explorer.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (query, info)
//! - `writer`: Console and CSV output of search results

pub mod cli;
pub mod commands;
pub mod writer;

pub use cli::{Cli, Commands, QueryArgs};
pub use commands::{
    execute_query, init_logging, load_settings, open_database, run_query, show_info,
};
pub use writer::{NeoWriter, OutputFormat};
