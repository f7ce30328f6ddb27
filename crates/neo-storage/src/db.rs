//! Name-keyed in-memory index of near-Earth objects.
//!
//! Objects are kept in the order their name first appears in the input.
//! Later rows for the same name append an orbit path to the existing object.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use neo_types::{NearEarthObject, NeoError};

use crate::record::NeoRecord;

/// Counts and date span of the loaded data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseStats {
    pub neo_count: usize,
    pub orbit_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// In-memory store of near-Earth objects keyed by name.
#[derive(Debug, Default)]
pub struct NeoDatabase {
    filename: Option<PathBuf>,
    neos: Vec<NearEarthObject>,
    by_name: HashMap<String, usize>,
}

impl NeoDatabase {
    /// Create an empty store that will read `filename` on `load_data(None)`.
    pub fn new(filename: Option<PathBuf>) -> Self {
        Self {
            filename,
            ..Self::default()
        }
    }

    /// Build a store from already-parsed rows.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = NeoRecord>,
    {
        let mut db = Self::default();
        for record in records {
            db.insert(record);
        }
        db
    }

    /// Load the CSV file given here, or the one given to `new`.
    ///
    /// The new contents replace the store only when every row parses.
    pub fn load_data(&mut self, filename: Option<&Path>) -> Result<(), NeoError> {
        let path = filename
            .map(Path::to_path_buf)
            .or_else(|| self.filename.clone())
            .ok_or_else(|| {
                NeoError::Config("Cannot load data, no filename provided".to_string())
            })?;

        info!(path = %path.display(), "Loading close-approach data");
        let file = File::open(&path)?;
        let loaded = Self::load_from_reader(file)?;

        self.neos = loaded.neos;
        self.by_name = loaded.by_name;
        self.filename = Some(path);
        Ok(())
    }

    /// Read a comma-delimited source with a header row.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self, NeoError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut db = Self::default();
        let mut rows = 0u64;
        for (index, result) in csv_reader.records().enumerate() {
            let raw = result.map_err(|e| NeoError::Csv(e.to_string()))?;
            // Header is line 1.
            let row = raw
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            db.insert(NeoRecord::from_csv_record(&raw, row)?);
            rows += 1;
        }

        let stats = db.stats();
        info!(
            rows,
            neos = stats.neo_count,
            orbits = stats.orbit_count,
            "Loaded close-approach data"
        );
        Ok(db)
    }

    /// Add one row: a new object, or another orbit for a known name.
    pub fn insert(&mut self, record: NeoRecord) {
        match self.by_name.get(&record.name) {
            Some(&index) => {
                let orbit = record.to_orbit();
                self.neos[index].update_orbits(orbit);
            }
            None => {
                debug!(name = %record.name, "New near-Earth object");
                self.by_name.insert(record.name.clone(), self.neos.len());
                self.neos.push(record.into_neo());
            }
        }
    }

    /// Look up an object by name
    pub fn get(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&index| &self.neos[index])
    }

    /// Objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.neos.iter()
    }

    pub fn len(&self) -> usize {
        self.neos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neos.is_empty()
    }

    /// File this store reads from, if any
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn stats(&self) -> DatabaseStats {
        let dates = || self.neos.iter().flat_map(|neo| neo.orbit_dates().iter().copied());
        DatabaseStats {
            neo_count: self.neos.len(),
            orbit_count: self.neos.iter().map(|neo| neo.orbits().len()).sum(),
            first_date: dates().min(),
            last_date: dates().max(),
        }
    }
}
