//! Query construction.
//!
//! A `Query` collects named, optional search parameters. `build_query`
//! resolves them into immutable `Selectors` for the searcher.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use neo_types::NeoError;

/// Date criterion applied to close-approach dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSearch {
    /// Inclusive on both ends
    Between { start: NaiveDate, end: NaiveDate },
    /// Exact calendar date
    Equals(NaiveDate),
}

impl DateSearch {
    /// Whether a single close-approach date satisfies the criterion.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            DateSearch::Between { start, end } => start <= date && date <= end,
            DateSearch::Equals(target) => date == target,
        }
    }

    /// Whether any of the dates satisfies the criterion.
    pub fn matches_any(&self, dates: &[NaiveDate]) -> bool {
        dates.iter().any(|&date| self.matches(date))
    }
}

/// Shape of the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnObject {
    /// Whole near-Earth objects
    #[serde(rename = "NEO")]
    Neo,
    /// Individual close approaches
    #[serde(rename = "Path")]
    Path,
}

impl ReturnObject {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnObject::Neo => "NEO",
            ReturnObject::Path => "Path",
        }
    }
}

impl fmt::Display for ReturnObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnObject {
    type Err = NeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEO" => Ok(ReturnObject::Neo),
            "Path" => Ok(ReturnObject::Path),
            other => Err(NeoError::Config(format!(
                "Unknown return object {other:?}, expected NEO or Path"
            ))),
        }
    }
}

/// Resolved search parameters consumed by `NeoSearcher`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selectors {
    pub date_search: DateSearch,
    pub number: usize,
    /// Raw `field:operator:value` expressions, parsed by the searcher
    pub filters: Vec<String>,
    pub return_object: ReturnObject,
}

/// Named search parameters. Unset fields are simply absent.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub date: Option<NaiveDate>,
    pub return_object: Option<ReturnObject>,
    pub number: Option<usize>,
    pub filters: Vec<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_return_object(mut self, return_object: ReturnObject) -> Self {
        self.return_object = Some(return_object);
        self
    }

    pub fn with_number(mut self, number: usize) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
        self
    }

    /// Resolve the parameters into `Selectors`.
    ///
    /// A complete start/end range takes precedence over a single date.
    pub fn build_query(&self) -> Result<Selectors, NeoError> {
        let date_search = match (self.start_date, self.end_date, self.date) {
            (Some(start), Some(end), _) => DateSearch::Between { start, end },
            (_, _, Some(date)) => DateSearch::Equals(date),
            _ => {
                return Err(NeoError::Config(
                    "Query needs either start_date and end_date, or date".to_string(),
                ))
            }
        };

        let return_object = self.return_object.ok_or_else(|| {
            NeoError::Config("Query needs a return_object (NEO or Path)".to_string())
        })?;

        let number = self
            .number
            .ok_or_else(|| NeoError::Config("Query needs a result number".to_string()))?;

        Ok(Selectors {
            date_search,
            number,
            filters: self.filters.clone(),
            return_object,
        })
    }
}
