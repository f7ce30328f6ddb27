//! Typed close-approach rows.
//!
//! The loader reads the NASA close-approach export by position. Only the
//! columns below are consumed; every other column is ignored.

use chrono::NaiveDate;
use csv::StringRecord;

use neo_types::{NearEarthObject, NeoError, OrbitPath, DATE_FORMAT};

/// Column positions in the close-approach export.
pub mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 2;
    pub const DIAMETER_MIN_KM: usize = 5;
    pub const DIAMETER_MAX_KM: usize = 6;
    pub const IS_HAZARDOUS: usize = 13;
    pub const CLOSE_APPROACH_DATE: usize = 17;
    pub const MISS_DISTANCE_KM: usize = 21;
}

/// One parsed row of the close-approach file.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoRecord {
    pub neo_id: String,
    pub name: String,
    pub diam_min: f64,
    pub diam_max: f64,
    pub hazard: bool,
    pub orbit_date: NaiveDate,
    pub miss: f64,
}

impl NeoRecord {
    /// Parse a raw CSV record. `row` is only used in error messages.
    pub fn from_csv_record(record: &StringRecord, row: u64) -> Result<Self, NeoError> {
        let field = move |index: usize, column: &'static str| {
            record
                .get(index)
                .ok_or_else(|| NeoError::parse(row, column, "missing column"))
        };

        Ok(Self {
            neo_id: field(columns::ID, "id")?.to_string(),
            name: field(columns::NAME, "name")?.to_string(),
            diam_min: parse_f64(
                field(columns::DIAMETER_MIN_KM, "estimated_diameter_min_kilometers")?,
                row,
                "estimated_diameter_min_kilometers",
            )?,
            diam_max: parse_f64(
                field(columns::DIAMETER_MAX_KM, "estimated_diameter_max_kilometers")?,
                row,
                "estimated_diameter_max_kilometers",
            )?,
            hazard: parse_flag(field(
                columns::IS_HAZARDOUS,
                "is_potentially_hazardous_asteroid",
            )?),
            orbit_date: parse_date(
                field(columns::CLOSE_APPROACH_DATE, "close_approach_date")?,
                row,
                "close_approach_date",
            )?,
            miss: parse_f64(
                field(columns::MISS_DISTANCE_KM, "miss_distance_kilometers")?,
                row,
                "miss_distance_kilometers",
            )?,
        })
    }

    /// The close approach described by this row
    pub fn to_orbit(&self) -> OrbitPath {
        OrbitPath::new(self.name.clone(), self.orbit_date, self.miss)
    }

    /// A new object whose first close approach is this row
    pub fn into_neo(self) -> NearEarthObject {
        let orbit = self.to_orbit();
        NearEarthObject::new(
            self.neo_id,
            self.name,
            self.diam_min,
            self.diam_max,
            self.hazard,
            orbit,
        )
    }
}

fn parse_f64(value: &str, row: u64, column: &'static str) -> Result<f64, NeoError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| NeoError::parse(row, column, format!("{value:?}: {e}")))
}

fn parse_date(value: &str, row: u64, column: &'static str) -> Result<NaiveDate, NeoError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| NeoError::parse(row, column, format!("{value:?}: {e}")))
}

/// Only the exact literal `True` is a true flag.
fn parse_flag(value: &str) -> bool {
    value == "True"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(name: &str, diam_min: &str, hazard: &str, date: &str, miss: &str) -> StringRecord {
        let mut fields = vec![""; 22];
        fields[columns::ID] = "3542519";
        fields[1] = "3542519";
        fields[columns::NAME] = name;
        fields[columns::DIAMETER_MIN_KM] = diam_min;
        fields[columns::DIAMETER_MAX_KM] = "0.9";
        fields[columns::IS_HAZARDOUS] = hazard;
        fields[columns::CLOSE_APPROACH_DATE] = date;
        fields[columns::MISS_DISTANCE_KM] = miss;
        StringRecord::from(fields)
    }

    #[test]
    fn test_parse_row() {
        let record = NeoRecord::from_csv_record(
            &raw_row("(2010 PK9)", "0.4", "True", "2020-01-01", "12345.5"),
            2,
        )
        .unwrap();

        assert_eq!(record.neo_id, "3542519");
        assert_eq!(record.name, "(2010 PK9)");
        assert_eq!(record.diam_min, 0.4);
        assert_eq!(record.diam_max, 0.9);
        assert!(record.hazard);
        assert_eq!(record.orbit_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(record.miss, 12345.5);
    }

    #[test]
    fn test_hazard_requires_exact_literal() {
        for literal in ["true", "TRUE", "1", "False", ""] {
            let record = NeoRecord::from_csv_record(
                &raw_row("A", "0.4", literal, "2020-01-01", "1"),
                2,
            )
            .unwrap();
            assert!(!record.hazard, "{literal:?} should not be hazardous");
        }
    }

    #[test]
    fn test_bad_float_is_parse_error() {
        let err = NeoRecord::from_csv_record(&raw_row("A", "wide", "False", "2020-01-01", "1"), 7)
            .unwrap_err();
        match err {
            NeoError::Parse { row, column, .. } => {
                assert_eq!(row, 7);
                assert_eq!(column, "estimated_diameter_min_kilometers");
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let err = NeoRecord::from_csv_record(&raw_row("A", "0.4", "False", "01/02/2020", "1"), 3)
            .unwrap_err();
        assert!(matches!(
            err,
            NeoError::Parse {
                column: "close_approach_date",
                ..
            }
        ));
    }

    #[test]
    fn test_short_row_is_parse_error() {
        let record = StringRecord::from(vec!["1", "1", "A"]);
        let err = NeoRecord::from_csv_record(&record, 2).unwrap_err();
        assert!(matches!(err, NeoError::Parse { .. }));
    }

    #[test]
    fn test_into_neo_carries_first_orbit() {
        let neo = NeoRecord::from_csv_record(&raw_row("A", "0.4", "False", "2020-01-01", "500"), 2)
            .unwrap()
            .into_neo();
        assert_eq!(neo.name, "A");
        assert_eq!(neo.orbits().len(), 1);
        assert_eq!(neo.orbits()[0].name, "A");
        assert_eq!(neo.orbits()[0].miss, 500.0);
    }
}
