// crates/gazetteer-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the gazetteer.
///
/// Returned by [`crate::PlaceSearch::stats`], these counts reflect the
/// in-memory store as it was loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub records: usize,
    pub distinct_names: usize,
}
