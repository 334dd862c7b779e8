// crates/gazetteer-core/src/model/page.rs
use crate::error::{GazetteerError, Result};
use std::ops::Range;

/// Index range covered by page `page_num` (1-based) of `page_size` items
/// over a sequence of `len` items.
///
/// Page `p` of size `s` spans `(p - 1) * s .. p * s`, clipped to `len`.
/// A page that starts past the end yields an empty range, not an error.
pub fn page_range(page_num: usize, page_size: usize, len: usize) -> Result<Range<usize>> {
    if page_num < 1 {
        return Err(GazetteerError::Validation(format!(
            "page_num must be >= 1, got {page_num}"
        )));
    }
    if page_size < 1 {
        return Err(GazetteerError::Validation(format!(
            "page_size must be >= 1, got {page_size}"
        )));
    }
    // page_num * page_size may exceed usize::MAX
    let start = (page_num - 1).saturating_mul(page_size).min(len);
    let end = page_num.saturating_mul(page_size).min(len);
    Ok(start..end)
}

/// Slices `items` to the requested page.
pub fn paginate<T>(items: &[T], page_num: usize, page_size: usize) -> Result<&[T]> {
    let range = page_range(page_num, page_size, items.len())?;
    Ok(&items[range])
}
