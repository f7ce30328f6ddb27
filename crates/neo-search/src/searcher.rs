//! Date search over the near-Earth-object store.
//!
//! Objects are scanned in store order. An object is a candidate when any of
//! its close-approach dates matches the date criterion; every filter must
//! then pass. For `Path` results each candidate is expanded into the orbit
//! paths whose own date matches. Results are cut to the requested number
//! without sorting.

use tracing::{debug, info, warn};

use neo_storage::NeoDatabase;
use neo_types::{NearEarthObject, NeoError, OrbitPath};

use crate::filter::{ComparisonMode, Filter};
use crate::query::{DateSearch, ReturnObject, Selectors};

/// Search results, borrowed from the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults<'db> {
    Neos(Vec<&'db NearEarthObject>),
    Paths(Vec<&'db OrbitPath>),
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Neos(neos) => neos.len(),
            SearchResults::Paths(paths) => paths.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn return_object(&self) -> ReturnObject {
        match self {
            SearchResults::Neos(_) => ReturnObject::Neo,
            SearchResults::Paths(_) => ReturnObject::Path,
        }
    }
}

/// Searcher answering `Selectors` against a loaded `NeoDatabase`.
pub struct NeoSearcher<'db> {
    db: &'db NeoDatabase,
    mode: ComparisonMode,
}

impl<'db> NeoSearcher<'db> {
    pub fn new(db: &'db NeoDatabase) -> Self {
        Self {
            db,
            mode: ComparisonMode::default(),
        }
    }

    /// Choose how `>` and `<` filters compare.
    pub fn with_comparison_mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Run a query.
    ///
    /// Fails with `UnsupportedFeature` before scanning if any filter
    /// expression is invalid. No matches is an empty result, not an error.
    pub fn get_objects(&self, query: &Selectors) -> Result<SearchResults<'db>, NeoError> {
        let filters = Filter::create_filter_options(&query.filters, self.mode)?;

        if query.number == 0 {
            warn!("Query asks for zero results");
        }

        let date_search = query.date_search;
        let candidates = self
            .db
            .iter()
            .filter(move |neo| date_search.matches_any(neo.orbit_dates()))
            .filter(|neo| filters.iter().all(|filter| filter.matches(neo)));

        let results = match query.return_object {
            ReturnObject::Neo => SearchResults::Neos(candidates.take(query.number).collect()),
            ReturnObject::Path => SearchResults::Paths(
                Self::get_orbits(candidates, date_search)
                    .take(query.number)
                    .collect(),
            ),
        };

        debug!(filters = filters.len(), ?date_search, "Applied query");
        info!(
            return_object = %query.return_object,
            number = query.number,
            results = results.len(),
            "Search complete"
        );

        Ok(results)
    }

    /// Orbit paths of `neos` whose own date matches.
    fn get_orbits<I>(neos: I, date_search: DateSearch) -> impl Iterator<Item = &'db OrbitPath>
    where
        I: Iterator<Item = &'db NearEarthObject>,
    {
        neos.flat_map(|neo| neo.orbits().iter())
            .filter(move |orbit| date_search.matches(orbit.orbit_date))
    }
}
