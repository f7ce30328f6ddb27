//! Near-Earth objects and their close-approach orbit paths.
//!
//! A `NearEarthObject` owns every `OrbitPath` recorded for it, in the order
//! the rows were loaded. The object also keeps a parallel list of the orbit
//! dates so date-only scans never touch the orbit records themselves.

use std::fmt;

use chrono::NaiveDate;

/// Calendar format used for close-approach dates on input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One observed close approach of a near-Earth object.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    /// Name of the owning object (back-reference only)
    pub name: String,

    /// Close-approach date
    pub orbit_date: NaiveDate,

    /// Miss distance in kilometers
    pub miss: f64,
}

impl OrbitPath {
    /// Create a new orbit path
    pub fn new(name: impl Into<String>, orbit_date: NaiveDate, miss: f64) -> Self {
        Self {
            name: name.into(),
            orbit_date,
            miss,
        }
    }

    /// Close-approach date formatted as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.orbit_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for OrbitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orbit on {}. Miss distance (km): {:.2}",
            self.date_string(),
            self.miss
        )
    }
}

/// A tracked near-Earth object with one or more close approaches.
///
/// Invariant: `orbit_dates()[i] == orbits()[i].orbit_date`, and neither
/// list is ever empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    /// Source identifier
    pub neo_id: String,

    /// Unique name, used as the store key
    pub name: String,

    /// Minimum estimated diameter in kilometers
    pub diam_min: f64,

    /// Maximum estimated diameter in kilometers
    pub diam_max: f64,

    /// Whether the object is potentially hazardous
    pub hazard: bool,

    orbits: Vec<OrbitPath>,
    orbit_dates: Vec<NaiveDate>,
}

impl NearEarthObject {
    /// Create a new object from its first recorded close approach.
    pub fn new(
        neo_id: impl Into<String>,
        name: impl Into<String>,
        diam_min: f64,
        diam_max: f64,
        hazard: bool,
        first_orbit: OrbitPath,
    ) -> Self {
        Self {
            neo_id: neo_id.into(),
            name: name.into(),
            diam_min,
            diam_max,
            hazard,
            orbit_dates: vec![first_orbit.orbit_date],
            orbits: vec![first_orbit],
        }
    }

    /// Append a close approach, keeping the date list in step.
    pub fn update_orbits(&mut self, orbit: OrbitPath) {
        self.orbit_dates.push(orbit.orbit_date);
        self.orbits.push(orbit);
    }

    /// Recorded close approaches in load order
    pub fn orbits(&self) -> &[OrbitPath] {
        &self.orbits
    }

    /// Dates of `orbits()`, index for index
    pub fn orbit_dates(&self) -> &[NaiveDate] {
        &self.orbit_dates
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO: name = {}, id = {}", self.name, self.neo_id)
    }
}
