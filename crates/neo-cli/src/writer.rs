//! Output of search results.
//!
//! - display: one line per result on the console
//! - csv_file: `;`-delimited file in the configured output directory

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use neo_search::SearchResults;
use neo_types::{NearEarthObject, NeoError, OrbitPath, DATE_FORMAT};

const DEFAULT_NEO_FILENAME: &str = "neo.csv";
const DEFAULT_ORBIT_FILENAME: &str = "orbit.csv";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[value(name = "display")]
    Display,
    #[value(name = "csv_file")]
    CsvFile,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Display => "display",
            OutputFormat::CsvFile => "csv_file",
        }
    }
}

#[derive(Serialize)]
struct NeoRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Orbits")]
    orbits: String,
    #[serde(rename = "Orbit dates")]
    orbit_dates: String,
}

#[derive(Serialize)]
struct OrbitRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Miss distance (km)")]
    miss: String,
    #[serde(rename = "Orbit date")]
    orbit_date: String,
}

/// Writes search results in one of the `OutputFormat`s.
pub struct NeoWriter {
    output_dir: PathBuf,
}

impl NeoWriter {
    /// `output_dir` receives `csv_file` output; it is created on demand.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `data`. Display output goes to `console`; csv_file output goes to
    /// `filename` (or a default name) under the output directory.
    pub fn write<W: Write>(
        &self,
        format: OutputFormat,
        data: &SearchResults<'_>,
        filename: Option<&str>,
        console: &mut W,
    ) -> Result<bool, NeoError> {
        match format {
            OutputFormat::Display => Self::write_display(data, console)?,
            OutputFormat::CsvFile => {
                let path = self.write_csv(data, filename)?;
                info!(path = %path.display(), rows = data.len(), "Wrote results");
            }
        }
        Ok(true)
    }

    /// Print one line per result, or `No objects found`.
    pub fn write_display<W: Write>(
        data: &SearchResults<'_>,
        console: &mut W,
    ) -> Result<(), NeoError> {
        if data.is_empty() {
            writeln!(console, "No objects found")?;
            return Ok(());
        }

        match data {
            SearchResults::Neos(neos) => {
                for neo in neos {
                    writeln!(
                        console,
                        "ID: {}, Name: {}, Orbits: {}, Orbit dates: {}",
                        neo.neo_id,
                        neo.name,
                        orbits_to_str(neo),
                        dates_to_str(neo)
                    )?;
                }
            }
            SearchResults::Paths(orbits) => {
                for orbit in orbits {
                    writeln!(
                        console,
                        "Name: {}, Miss distance (km): {:.2}, Date: {}",
                        orbit.name,
                        orbit.miss,
                        orbit.date_string()
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Write a `;`-delimited file and return its path.
    pub fn write_csv(
        &self,
        data: &SearchResults<'_>,
        filename: Option<&str>,
    ) -> Result<PathBuf, NeoError> {
        let default_name = match data {
            SearchResults::Neos(_) => DEFAULT_NEO_FILENAME,
            SearchResults::Paths(_) => DEFAULT_ORBIT_FILENAME,
        };
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename.unwrap_or(default_name));

        match data {
            SearchResults::Neos(neos) => write_neo_csv(&path, neos)?,
            SearchResults::Paths(orbits) => write_orbit_csv(&path, orbits)?,
        }
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn csv_writer(path: &Path) -> Result<csv::Writer<fs::File>, NeoError> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)
}

fn write_neo_csv(path: &Path, neos: &[&NearEarthObject]) -> Result<(), NeoError> {
    let mut writer = csv_writer(path)?;
    writer
        .write_record(["ID", "Name", "Orbits", "Orbit dates"])
        .map_err(csv_error)?;
    for neo in neos {
        writer
            .serialize(NeoRow {
                id: &neo.neo_id,
                name: &neo.name,
                orbits: orbits_to_str(neo),
                orbit_dates: dates_to_str(neo),
            })
            .map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_orbit_csv(path: &Path, orbits: &[&OrbitPath]) -> Result<(), NeoError> {
    let mut writer = csv_writer(path)?;
    writer
        .write_record(["Name", "Miss distance (km)", "Orbit date"])
        .map_err(csv_error)?;
    for orbit in orbits {
        writer
            .serialize(OrbitRow {
                name: &orbit.name,
                miss: format!("{:.2}", orbit.miss),
                orbit_date: orbit.date_string(),
            })
            .map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(err: csv::Error) -> NeoError {
    NeoError::Csv(err.to_string())
}

fn orbits_to_str(neo: &NearEarthObject) -> String {
    let orbits: Vec<String> = neo.orbits().iter().map(ToString::to_string).collect();
    format!("[{}]", orbits.join(", "))
}

fn dates_to_str(neo: &NearEarthObject) -> String {
    let dates: Vec<String> = neo
        .orbit_dates()
        .iter()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .collect();
    format!("[{}]", dates.join(", "))
}
