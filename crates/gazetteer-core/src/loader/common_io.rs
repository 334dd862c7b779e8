// crates/gazetteer-core/src/loader/common_io.rs
use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file as a buffered line stream.
///
/// With the `compact` feature, a path ending in `.gz` is decompressed on the
/// fly so the dump never has to be unpacked on disk.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        GazetteerError::Io(io::Error::new(
            e.kind(),
            format!("dataset not found at {}: {}", path.display(), e),
        ))
    })?;

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(file)))));
        }
    }

    Ok(Box::new(BufReader::new(file)))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
