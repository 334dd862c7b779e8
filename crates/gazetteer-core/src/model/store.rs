// crates/gazetteer-core/src/model/store.rs
use super::record::{canonical_id, PlaceRecord};
use crate::error::{GazetteerError, Result};
use crate::traits::GeoBackend;
use std::collections::HashSet;

/// The full ordered record set, in the order it was read from the source.
///
/// Built once through [`RecordStoreBuilder`] and read-only afterwards.
#[derive(Clone, Debug)]
pub struct RecordStore<B: GeoBackend> {
    records: Vec<PlaceRecord<B>>,
}

impl<B: GeoBackend> RecordStore<B> {
    pub fn builder() -> RecordStoreBuilder<B> {
        RecordStoreBuilder::default()
    }

    /// Builds a store from already-parsed records, enforcing the same
    /// invariants as the file loader. Line numbers in errors are 1-based
    /// positions in `records`.
    pub fn from_records(records: Vec<PlaceRecord<B>>) -> Result<Self> {
        let mut builder = RecordStoreBuilder::with_capacity(records.len());
        for (pos, record) in records.into_iter().enumerate() {
            builder.push(pos + 1, record)?;
        }
        Ok(builder.finish())
    }

    pub fn records(&self) -> &[PlaceRecord<B>] {
        &self.records
    }

    pub fn get(&self, pos: usize) -> Option<&PlaceRecord<B>> {
        self.records.get(pos)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceRecord<B>> {
        self.records.iter()
    }
}

/// Accumulates records row by row while checking store-wide invariants.
#[derive(Debug)]
pub struct RecordStoreBuilder<B: GeoBackend> {
    records: Vec<PlaceRecord<B>>,
    seen: HashSet<u64>,
}

impl<B: GeoBackend> Default for RecordStoreBuilder<B> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<B: GeoBackend> RecordStoreBuilder<B> {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            records: Vec::with_capacity(n),
            seen: HashSet::with_capacity(n),
        }
    }

    pub fn push(&mut self, line: usize, record: PlaceRecord<B>) -> Result<()> {
        let id = canonical_id(record.id())
            .map_err(|reason| GazetteerError::data_load(line, "geonameid", reason))?;
        if record.name().is_empty() {
            return Err(GazetteerError::data_load(line, "name", "empty"));
        }
        if !self.seen.insert(id) {
            return Err(GazetteerError::DuplicateId {
                line,
                id: record.id().to_owned(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(mut self) -> RecordStore<B> {
        self.records.shrink_to_fit();
        RecordStore {
            records: self.records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::record;
    use crate::DefaultBackend;

    #[test]
    fn keeps_load_order() {
        let store = RecordStore::from_records(vec![
            record("3", "C", "1", "0", "Europe/Moscow"),
            record("1", "A", "1", "0", "Europe/Moscow"),
            record("2", "B", "1", "0", "Europe/Moscow"),
        ])
        .unwrap();
        let ids: Vec<_> = store.iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = RecordStore::from_records(vec![
            record("7", "A", "1", "0", "Europe/Moscow"),
            record("7", "B", "1", "0", "Europe/Moscow"),
        ])
        .unwrap_err();
        assert!(matches!(err, GazetteerError::DuplicateId { line: 2, .. }));
    }

    #[test]
    fn rejects_non_canonical_ids() {
        let mut builder = RecordStore::<DefaultBackend>::builder();
        builder
            .push(1, record("7", "A", "1", "0", "Europe/Moscow"))
            .unwrap();
        for (line, id) in [(2, "007"), (3, "+7"), (4, "")] {
            let err = builder
                .push(line, record(id, "A", "1", "0", "Europe/Moscow"))
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    GazetteerError::DataLoad {
                        field: "geonameid",
                        ..
                    }
                ),
                "{id:?}"
            );
        }
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn rejects_empty_name() {
        let mut builder = RecordStore::<DefaultBackend>::builder();
        let err = builder
            .push(5, record("1", "", "1", "0", "Europe/Moscow"))
            .unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataLoad {
                line: 5,
                field: "name",
                ..
            }
        ));
        assert!(builder.is_empty());
    }
}
