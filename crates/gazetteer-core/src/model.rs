// crates/gazetteer-core/src/model.rs

//! # Gazetteer Model
//!
//! The record type, the store that owns every record, and the two derived
//! indexes. [`GazetteerDb`] bundles them into the single service object that
//! request handlers share.

pub mod lookup;
pub mod names;
pub mod page;
pub mod record;
pub mod store;

pub use lookup::LookupIndex;
pub use names::NameIndex;
pub use record::PlaceRecord;
pub use store::{RecordStore, RecordStoreBuilder};

use crate::traits::{DefaultBackend, GeoBackend};

/// The loaded gazetteer: records plus the indexes built over them.
///
/// Construct once at startup (see [`crate::loader`]) and share read-only,
/// e.g. behind an `Arc`. There is no way to mutate it afterwards, so the
/// indexes can never go stale.
#[derive(Clone, Debug)]
pub struct GazetteerDb<B: GeoBackend> {
    pub(crate) store: RecordStore<B>,
    pub(crate) by_id: LookupIndex,
    pub(crate) names: NameIndex,
}

impl<B: GeoBackend> GazetteerDb<B> {
    /// Builds both indexes over `store` in a single pass each.
    pub fn from_store(store: RecordStore<B>) -> Self {
        let by_id = LookupIndex::build(&store);
        let names = NameIndex::build(&store);
        Self {
            store,
            by_id,
            names,
        }
    }

    pub fn records(&self) -> &[PlaceRecord<B>] {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Convenient alias for the default backend.
pub type DefaultGazetteer = GazetteerDb<DefaultBackend>;

#[cfg(test)]
pub(crate) mod test_support {
    use super::PlaceRecord;
    use crate::traits::DefaultBackend;
    use chrono::NaiveDate;

    fn some(v: &str) -> Option<String> {
        (!v.is_empty()).then(|| v.to_owned())
    }

    /// Minimal record with the columns the query layer looks at.
    pub fn record(
        id: &str,
        name: &str,
        latitude: &str,
        population: &str,
        timezone: &str,
    ) -> PlaceRecord<DefaultBackend> {
        PlaceRecord {
            geonameid: id.to_owned(),
            name: name.to_owned(),
            asciiname: some(name),
            alternatenames: None,
            latitude: some(latitude),
            longitude: some("37.6"),
            feature_class: some("P"),
            feature_code: some("PPL"),
            country_code: some("RU"),
            cc2: None,
            admin1_code: None,
            admin2_code: None,
            admin3_code: None,
            admin4_code: None,
            population: some(population),
            elevation: None,
            dem: None,
            timezone: some(timezone),
            modification_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }
}
