//! Integration tests for neo-explorer.
//!
//! These tests run the query and info commands against a data file written
//! to a temporary directory, from CSV load through to written output.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use neo_cli::{run_query, show_info, OutputFormat, QueryArgs};
use neo_search::ReturnObject;
use neo_types::Settings;

const HEADER: &str = "id,neo_reference_id,name,nasa_jpl_url,absolute_magnitude_h,\
estimated_diameter_min_kilometers,estimated_diameter_max_kilometers,\
estimated_diameter_min_meters,estimated_diameter_max_meters,\
estimated_diameter_min_miles,estimated_diameter_max_miles,\
estimated_diameter_min_feet,estimated_diameter_max_feet,\
is_potentially_hazardous_asteroid,kilometers_per_second,kilometers_per_hour,\
miles_per_hour,close_approach_date,close_approach_date_full,epoch_date_close_approach,\
orbiting_body,miss_distance_kilometers,miss_distance_astronomical,miss_distance_lunar,\
miss_distance_miles";

/// Test harness holding a data file and an output directory.
struct TestHarness {
    temp_dir: TempDir,
    settings: Settings,
}

impl TestHarness {
    fn new(rows: &[(&str, &str, f64, &str, &str, f64)]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().join("neo_data.csv");

        let mut data = String::from(HEADER);
        for (id, name, diam_min, hazard, date, miss) in rows {
            data.push_str(&format!(
                "\n{id},{id},{name},http://ssd.jpl.nasa.gov,20.1,{diam_min},{diam_max},1,2,3,4,5,6,\
{hazard},12.5,45000,28000,{date},{date} 04:51,946969860000,Earth,{miss},0.2,80,24000000",
                diam_max = diam_min * 2.0
            ));
        }
        fs::write(&data_path, data).expect("Failed to write data file");

        let settings = Settings {
            data_path: data_path.to_string_lossy().to_string(),
            output_dir: temp_dir.path().join("out").to_string_lossy().to_string(),
            ..Settings::default()
        };

        Self { temp_dir, settings }
    }

    /// Entity "A" has one approach inside January 2020 and one outside.
    fn sample() -> Self {
        Self::new(&[
            ("1", "A", 0.5, "False", "2020-01-01", 500.0),
            ("2", "B", 1.2, "True", "2020-01-20", 75000.0),
            ("1", "A", 0.5, "False", "2020-02-01", 50000.0),
            ("3", "C", 0.05, "True", "2020-01-31", 120.0),
        ])
    }

    fn run(&self, args: QueryArgs) -> anyhow::Result<String> {
        let mut console = Vec::new();
        run_query(&self.settings, &args, &mut console)?;
        Ok(String::from_utf8(console).expect("Output is not UTF-8"))
    }

    fn out_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("out")
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn january(return_object: ReturnObject, number: usize, filters: &[&str]) -> QueryArgs {
    QueryArgs {
        date: None,
        start_date: Some(date("2020-01-01")),
        end_date: Some(date("2020-01-31")),
        return_object,
        number: Some(number),
        filters: filters.iter().map(|f| f.to_string()).collect(),
        output: OutputFormat::Display,
        filename: None,
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output file")
}

#[test]
fn test_distance_filter_neo_display() {
    let harness = TestHarness::sample();
    let output = harness
        .run(january(ReturnObject::Neo, 5, &["distance:<=:1000"]))
        .unwrap();

    assert_eq!(
        output,
        "ID: 1, Name: A, Orbits: [Orbit on 2020-01-01. Miss distance (km): 500.00, \
Orbit on 2020-02-01. Miss distance (km): 50000.00], Orbit dates: [2020-01-01, 2020-02-01]\n\
ID: 3, Name: C, Orbits: [Orbit on 2020-01-31. Miss distance (km): 120.00], \
Orbit dates: [2020-01-31]\n"
    );
}

#[test]
fn test_distance_filter_path_display() {
    let harness = TestHarness::sample();
    let output = harness
        .run(january(ReturnObject::Path, 5, &["distance:<=:1000"]))
        .unwrap();

    assert_eq!(
        output,
        "Name: A, Miss distance (km): 500.00, Date: 2020-01-01\n\
Name: C, Miss distance (km): 120.00, Date: 2020-01-31\n"
    );
}

#[test]
fn test_number_zero_prints_nothing_found() {
    let harness = TestHarness::sample();
    let output = harness.run(january(ReturnObject::Neo, 0, &[])).unwrap();
    assert_eq!(output, "No objects found\n");
}

#[test]
fn test_default_number_comes_from_settings() {
    let mut harness = TestHarness::sample();
    harness.settings.default_number = 1;

    let mut args = january(ReturnObject::Neo, 0, &[]);
    args.number = None;
    let output = harness.run(args).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("ID: 1, Name: A"));
}

#[test]
fn test_hazard_filter_with_single_date() {
    let harness = TestHarness::sample();
    let args = QueryArgs {
        date: Some(date("2020-01-20")),
        start_date: None,
        end_date: None,
        ..january(ReturnObject::Path, 10, &["is_hazardous:=:True"])
    };
    let output = harness.run(args).unwrap();
    assert_eq!(output, "Name: B, Miss distance (km): 75000.00, Date: 2020-01-20\n");
}

#[test]
fn test_strict_comparisons_from_settings() {
    let mut harness = TestHarness::sample();
    let args = january(ReturnObject::Neo, 10, &["diameter:>:0.5"]);

    let inclusive = harness.run(args.clone()).unwrap();
    assert_eq!(inclusive.lines().count(), 2);

    harness.settings.strict_comparisons = true;
    let strict = harness.run(args).unwrap();
    assert_eq!(strict.lines().count(), 1);
    assert!(strict.starts_with("ID: 2, Name: B"));
}

#[test]
fn test_csv_file_output() {
    let harness = TestHarness::sample();
    let mut args = january(ReturnObject::Path, 10, &[]);
    args.output = OutputFormat::CsvFile;

    let console = harness.run(args).unwrap();
    assert!(console.is_empty());

    assert_eq!(
        read(&harness.out_dir().join("orbit.csv")),
        "Name;Miss distance (km);Orbit date\n\
A;500.00;2020-01-01\n\
B;75000.00;2020-01-20\n\
C;120.00;2020-01-31\n"
    );
}

#[test]
fn test_csv_file_output_with_filename() {
    let harness = TestHarness::sample();
    let mut args = january(ReturnObject::Neo, 10, &["is_hazardous:=:True"]);
    args.output = OutputFormat::CsvFile;
    args.filename = Some("hazardous.csv".to_string());

    harness.run(args).unwrap();

    let contents = read(&harness.out_dir().join("hazardous.csv"));
    let names: Vec<&str> = contents
        .lines()
        .skip(1)
        .map(|line| line.split(';').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn test_unsupported_filter_fails() {
    let harness = TestHarness::sample();
    let err = harness
        .run(january(ReturnObject::Neo, 5, &["bogus_field:>=:5"]))
        .unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported feature"));
}

#[test]
fn test_missing_date_fails() {
    let harness = TestHarness::sample();
    let args = QueryArgs {
        start_date: None,
        ..january(ReturnObject::Neo, 5, &[])
    };
    let err = harness.run(args).unwrap_err();
    assert!(format!("{err:#}").contains("Configuration error"));
}

#[test]
fn test_missing_data_file_fails() {
    let mut harness = TestHarness::sample();
    harness.settings.data_path = harness
        .temp_dir
        .path()
        .join("absent.csv")
        .to_string_lossy()
        .to_string();
    let err = harness.run(january(ReturnObject::Neo, 5, &[])).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load data"));
}

#[test]
fn test_info() {
    let harness = TestHarness::sample();
    let mut console = Vec::new();
    show_info(&harness.settings, &mut console).unwrap();
    let output = String::from_utf8(console).unwrap();

    assert!(output.contains("Near-Earth objects: 3\n"));
    assert!(output.contains("Close approaches: 4\n"));
    assert!(output.contains("First approach: 2020-01-01\n"));
    assert!(output.contains("Last approach: 2020-02-01\n"));
}
