// crates/gazetteer-core/src/lib.rs

//! # gazetteer-core
//!
//! An immutable, in-memory gazetteer built from a GeoNames country dump.
//!
//! Load the tab-separated file once at startup, then share the resulting
//! [`GazetteerDb`] between any number of readers:
//!
//! ```no_run
//! use gazetteer_core::{DefaultGazetteer, PlaceSearch};
//!
//! let db = DefaultGazetteer::load_from_path("RU.txt")?;
//!
//! let moscow = db.city(524901)?;
//! let first_page = db.cities_page(1, 20)?;
//! let hints = db.autocomplete("Мос"); // transliterated to "Mos"
//! let cmp = db.compare_cities("Москва", "Санкт-Петербург")?;
//! println!("{} is further north", cmp.more_northerly);
//! # Ok::<(), gazetteer_core::GazetteerError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod compare;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::compare::ComparisonResult;
pub use crate::error::{GazetteerError, Result};
pub use crate::model::{DefaultGazetteer, GazetteerDb, PlaceRecord, RecordStore};
pub use crate::traits::{DefaultBackend, GeoBackend, PlaceSearch};
