//! In-memory store for near-Earth-object close-approach data.
//!
//! Provides:
//! - Positional CSV row parsing into typed records
//! - A name-keyed index that groups rows into objects in load order
//! - Basic statistics over the loaded data

pub mod db;
pub mod record;

pub use db::{DatabaseStats, NeoDatabase};
pub use record::{columns, NeoRecord};
