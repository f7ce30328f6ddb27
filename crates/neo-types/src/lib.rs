//! # neo-types
//!
//! Shared domain types for the near-Earth-object explorer.
//!
//! This crate defines the core data structures used throughout the system:
//! - NearEarthObject: a tracked object and its close approaches
//! - OrbitPath: one observed close approach (date + miss distance)
//! - Settings: Configuration types
//! - NeoError: Error taxonomy shared by the loader, search engine and writer
//!
//! ## Usage
//!
//! ```rust
//! use neo_types::{NearEarthObject, OrbitPath};
//! ```

pub mod config;
pub mod error;
pub mod model;

pub use config::Settings;
pub use error::NeoError;
pub use model::{NearEarthObject, OrbitPath, DATE_FORMAT};
