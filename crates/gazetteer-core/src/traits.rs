// crates/gazetteer-core/src/traits.rs
use crate::common::DbStats;
use crate::compare::ComparisonResult;
use crate::error::Result;
use crate::model::PlaceRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage backend for the strings held by a [`PlaceRecord`].
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example to use interned or compact types) without
/// changing the accessors, which always hand out `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` so a loaded
/// database can be shared across request handlers.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;
}

/// Default backend: plain `String`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }
}

/// The query surface of the gazetteer.
///
/// Every name-based operation transliterates its input with
/// [`crate::text::transliterate`] before matching, so callers may pass
/// Cyrillic or Latin spellings interchangeably.
pub trait PlaceSearch<B: GeoBackend> {
    fn stats(&self) -> DbStats;

    /// Looks a record up by its identifier as stored in the source file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gazetteer_core::{DefaultGazetteer, PlaceSearch};
    ///
    /// let db = DefaultGazetteer::load_from_path("RU.txt").unwrap();
    /// match db.city_by_id("524901") {
    ///     Ok(city) => println!("{} ({:?})", city.name(), city.timezone()),
    ///     Err(e) => eprintln!("{e}"),
    /// }
    /// ```
    fn city_by_id(&self, id: &str) -> Result<&PlaceRecord<B>>;

    /// Numeric convenience wrapper around [`PlaceSearch::city_by_id`].
    fn city(&self, geonameid: u64) -> Result<&PlaceRecord<B>> {
        self.city_by_id(&geonameid.to_string())
    }

    /// Returns page `page_num` (1-based) of `page_size` records in load order.
    ///
    /// Pages past the end are empty. `page_num` or `page_size` below 1 is a
    /// validation error.
    fn cities_page(&self, page_num: usize, page_size: usize) -> Result<&[PlaceRecord<B>]>;

    /// Distinct names starting with `prefix`, sorted.
    fn autocomplete(&self, prefix: &str) -> Vec<&str>;

    /// Resolves a (transliterated) name to the most populous record carrying it.
    fn resolve_name(&self, name: &str) -> Result<&PlaceRecord<B>>;

    /// Compares two places evaluated at a single instant `now`.
    fn compare_cities_at(
        &self,
        first: &str,
        second: &str,
        now: DateTime<Utc>,
    ) -> Result<ComparisonResult<'_, B>>;

    /// Compares two places using the current wall-clock time.
    fn compare_cities(&self, first: &str, second: &str) -> Result<ComparisonResult<'_, B>> {
        self.compare_cities_at(first, second, Utc::now())
    }
}
