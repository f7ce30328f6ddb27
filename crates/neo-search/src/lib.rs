//! # neo-search
//!
//! Date and field-filter queries over the near-Earth-object store.
//!
//! ## Features
//! - Between (inclusive) and equals date criteria
//! - `field:operator:value` filters on object and orbit-path attributes
//! - Results as whole objects or as individual orbit paths
//! - Result count limit applied in store order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use neo_search::{NeoSearcher, Query, ReturnObject};
//!
//! let selectors = Query::new()
//!     .with_range(start, end)
//!     .with_filter("distance:<=:1000")
//!     .with_return_object(ReturnObject::Neo)
//!     .with_number(10)
//!     .build_query()?;
//! let results = NeoSearcher::new(&db).get_objects(&selectors)?;
//! ```

pub mod filter;
pub mod query;
pub mod searcher;

pub use filter::{ComparisonMode, FieldAccessor, Filter, FilterField, FilterScope, Operator};
pub use query::{DateSearch, Query, ReturnObject, Selectors};
pub use searcher::{NeoSearcher, SearchResults};
