// crates/gazetteer-core/src/search.rs
use crate::common::DbStats;
use crate::compare::{compare_records, ComparisonResult};
use crate::error::{GazetteerError, Result};
use crate::model::{page, GazetteerDb, PlaceRecord};
use crate::text::{needs_transliteration, transliterate};
use crate::traits::{GeoBackend, PlaceSearch};
use chrono::{DateTime, Utc};
use tracing::debug;

impl<B: GeoBackend> GazetteerDb<B> {
    /// Most populous record among those named exactly `name` (already
    /// normalized). Equal populations resolve to the earliest in store order.
    fn best_named(&self, name: &str) -> Option<&PlaceRecord<B>> {
        let mut best: Option<(&PlaceRecord<B>, u64)> = None;
        for &pos in self.names.positions(name) {
            let record = &self.store.records()[pos];
            let population = record.population().unwrap_or(0);
            match best {
                Some((_, top)) if population <= top => {}
                _ => best = Some((record, population)),
            }
        }
        best.map(|(record, _)| record)
    }
}

fn normalize_query(input: &str) -> String {
    let normalized = transliterate(input);
    if needs_transliteration(input) {
        debug!(input, normalized = normalized.as_str(), "transliterated query");
    }
    normalized
}

impl<B: GeoBackend> PlaceSearch<B> for GazetteerDb<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            records: self.store.len(),
            distinct_names: self.names.len(),
        }
    }

    fn city_by_id(&self, id: &str) -> Result<&PlaceRecord<B>> {
        self.by_id
            .position(id)
            .and_then(|pos| self.store.get(pos))
            .ok_or_else(|| {
                debug!(geonameid = id, "no record with this id");
                GazetteerError::NotFound(format!("city {id}"))
            })
    }

    fn cities_page(&self, page_num: usize, page_size: usize) -> Result<&[PlaceRecord<B>]> {
        page::paginate(self.store.records(), page_num, page_size)
    }

    fn autocomplete(&self, prefix: &str) -> Vec<&str> {
        let prefix = normalize_query(prefix);
        self.names.prefix_search(&prefix)
    }

    fn resolve_name(&self, name: &str) -> Result<&PlaceRecord<B>> {
        let name = normalize_query(name);
        self.best_named(&name).ok_or_else(|| {
            debug!(name = name.as_str(), "no record with this name");
            GazetteerError::NotFound(format!("city {name:?}"))
        })
    }

    fn compare_cities_at(
        &self,
        first: &str,
        second: &str,
        now: DateTime<Utc>,
    ) -> Result<ComparisonResult<'_, B>> {
        let a = self.resolve_name(first)?;
        let b = self.resolve_name(second)?;
        Ok(compare_records(a, b, now))
    }
}
