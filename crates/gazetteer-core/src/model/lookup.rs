// crates/gazetteer-core/src/model/lookup.rs
use super::store::RecordStore;
use crate::traits::GeoBackend;
use std::collections::HashMap;

/// `geonameid` → position in the [`RecordStore`].
///
/// Holds indices only; the records stay owned by the store.
#[derive(Clone, Debug, Default)]
pub struct LookupIndex {
    by_id: HashMap<String, usize>,
}

impl LookupIndex {
    pub fn build<B: GeoBackend>(store: &RecordStore<B>) -> Self {
        let mut by_id = HashMap::with_capacity(store.len());
        for (pos, record) in store.records().iter().enumerate() {
            by_id.insert(record.id().to_owned(), pos);
        }
        Self { by_id }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
