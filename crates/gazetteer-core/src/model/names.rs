// crates/gazetteer-core/src/model/names.rs
use super::store::RecordStore;
use crate::text::transliterate;
use crate::traits::GeoBackend;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Sorted map from normalized name to the store positions carrying it.
///
/// Keys are the record names passed through [`transliterate`], which leaves
/// Latin names untouched. Positions under one key are in store order, which
/// makes the duplicate-name tie-break deterministic.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    names: BTreeMap<String, Vec<usize>>,
}

impl NameIndex {
    pub fn build<B: GeoBackend>(store: &RecordStore<B>) -> Self {
        let mut names: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (pos, record) in store.iter().enumerate() {
            names
                .entry(transliterate(record.name()))
                .or_default()
                .push(pos);
        }
        Self { names }
    }

    /// All distinct names starting with `prefix` (byte-wise, case-sensitive).
    ///
    /// The caller normalizes `prefix`. An empty prefix yields every name.
    /// Results come out in lexicographic order.
    pub fn prefix_search<'a>(&'a self, prefix: &str) -> Vec<&'a str> {
        self.names
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(name, _)| name.as_str())
            .take_while(|name| name.starts_with(prefix))
            .collect()
    }

    /// Store positions of every record named exactly `name`.
    pub fn positions(&self, name: &str) -> &[usize] {
        self.names.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
