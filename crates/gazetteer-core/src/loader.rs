// crates/gazetteer-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and feeds the rows,
//! one at a time, through the column schema into a [`RecordStore`].
//! Loading is all-or-nothing: the first bad row aborts it.

pub mod common_io;
pub mod schema;

use crate::error::{GazetteerError, Result};
use crate::model::{GazetteerDb, RecordStore};
use crate::traits::{DefaultBackend, GeoBackend};
use std::io::{BufRead, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Where the country dump is published; unzip it to get `RU.txt`.
pub const DATA_SOURCE_URL: &str = "https://download.geonames.org/export/dump/RU.zip";

/// Streams tab-separated rows from `reader` into a [`RecordStore`].
///
/// A single line buffer is reused, so only the parsed records are kept in
/// memory. Blank lines are skipped and a trailing `\r` is ignored.
pub fn load_store<B: GeoBackend, R: BufRead>(mut reader: R) -> Result<RecordStore<B>> {
    let mut builder = RecordStore::builder();
    let mut buf = String::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        line_no += 1;
        let read = reader.read_line(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => {
                GazetteerError::data_load(line_no, "row", "not valid UTF-8")
            }
            _ => GazetteerError::Io(e),
        })?;
        if read == 0 {
            break;
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            debug!(line = line_no, "skipping blank line");
            continue;
        }
        builder.push(line_no, schema::parse_row(line_no, line)?)?;
    }

    Ok(builder.finish())
}

impl<B: GeoBackend> GazetteerDb<B> {
    /// Loads from any buffered reader and builds the indexes.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let started = Instant::now();
        let store = load_store(reader)?;
        let db = Self::from_store(store);
        info!(
            records = db.len(),
            distinct_names = db.names.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "gazetteer loaded"
        );
        Ok(db)
    }

    /// **Standard Loader:** opens `path` (gzip aware) and loads it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading gazetteer");
        let reader = common_io::open_stream(path)?;
        Self::load_from_reader(reader)
    }
}

impl GazetteerDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "RU.txt"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }
}
