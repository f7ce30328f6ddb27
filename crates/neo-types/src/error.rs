//! Error types for the neo-explorer system.

use thiserror::Error;

/// Unified error type for loading, querying and writing.
#[derive(Debug, Error)]
pub enum NeoError {
    /// No data source, or a query/settings shape that cannot be resolved
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed field while loading a row
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: u64,
        column: &'static str,
        message: String,
    },

    /// Filter references an unknown field or operator
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error not tied to a single field
    #[error("CSV error: {0}")]
    Csv(String),
}

impl NeoError {
    /// Build a parse error for `column` of `row`.
    pub fn parse(row: u64, column: &'static str, message: impl Into<String>) -> Self {
        NeoError::Parse {
            row,
            column,
            message: message.into(),
        }
    }
}
