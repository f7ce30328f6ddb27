//! Configuration loading for neo-explorer.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/neo-explorer/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::NeoError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the close-approach CSV file
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Directory that receives `csv_file` output
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Treat `>` and `<` filters as strict comparisons.
    /// When false they behave as `>=` and `<=`.
    #[serde(default)]
    pub strict_comparisons: bool,

    /// Result count used when a query does not give one
    #[serde(default = "default_number")]
    pub default_number: usize,
}

fn default_data_path() -> String {
    "data/neo_data.csv".to_string()
}

fn default_output_dir() -> String {
    "out".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_number() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            output_dir: default_output_dir(),
            log_level: default_log_level(),
            strict_comparisons: false,
            default_number: default_number(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/neo-explorer/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (NEO_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, NeoError> {
        let config_dir = ProjectDirs::from("", "", "neo-explorer")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("data_path", default_data_path())
            .map_err(|e| NeoError::Config(e.to_string()))?
            .set_default("output_dir", default_output_dir())
            .map_err(|e| NeoError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| NeoError::Config(e.to_string()))?
            .set_default("strict_comparisons", false)
            .map_err(|e| NeoError::Config(e.to_string()))?
            .set_default("default_number", default_number() as i64)
            .map_err(|e| NeoError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: NEO_DATA_PATH, NEO_OUTPUT_DIR, NEO_LOG_LEVEL, ...
        // No separator: keys contain underscores and there is no nesting.
        builder = builder.add_source(Environment::with_prefix("NEO").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| NeoError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| NeoError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), NeoError> {
        if self.data_path.trim().is_empty() {
            return Err(NeoError::Config("data_path must not be empty".to_string()));
        }
        if self.output_dir.trim().is_empty() {
            return Err(NeoError::Config("output_dir must not be empty".to_string()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(NeoError::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    /// Path to the data file
    pub fn data_file(&self) -> PathBuf {
        PathBuf::from(&self.data_path)
    }

    /// Path to the output directory
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}
