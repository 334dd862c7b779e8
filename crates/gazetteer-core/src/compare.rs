// crates/gazetteer-core/src/compare.rs

//! Two-place comparison: which lies further north, and how far apart their
//! clocks are right now.

use crate::model::PlaceRecord;
use crate::traits::GeoBackend;
use chrono::{DateTime, Offset, TimeDelta, TimeZone, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::warn;

/// The outcome of comparing two resolved places.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct ComparisonResult<'a, B: GeoBackend> {
    /// First and second place, in argument order.
    pub cities: [&'a PlaceRecord<B>; 2],
    /// Name of the place with the larger latitude.
    pub more_northerly: String,
    pub timezone_coincidence: bool,
    /// UTC offset of the first place minus that of the second, in seconds.
    pub offset_delta_seconds: i32,
    /// Absolute offset difference rendered as `H:MM:SS`.
    pub time_shifting: String,
}

impl<'a, B: GeoBackend> ComparisonResult<'a, B> {
    pub fn first(&self) -> &'a PlaceRecord<B> {
        self.cities[0]
    }

    pub fn second(&self) -> &'a PlaceRecord<B> {
        self.cities[1]
    }

    /// Absolute difference between the two UTC offsets.
    pub fn time_shift(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.offset_delta_seconds.unsigned_abs()))
    }
}

/// UTC offset of `record`'s timezone at `now`, in seconds.
///
/// Places without a timezone are evaluated as UTC.
pub fn utc_offset_seconds<B: GeoBackend>(record: &PlaceRecord<B>, now: DateTime<Utc>) -> i32 {
    match record.tz() {
        Some(tz) => tz
            .offset_from_utc_datetime(&now.naive_utc())
            .fix()
            .local_minus_utc(),
        None => {
            if let Some(zone) = record.timezone() {
                warn!(geonameid = record.id(), zone, "unknown timezone, assuming UTC");
            }
            0
        }
    }
}

/// Picks the more northerly of two records by numeric latitude.
///
/// A record with a latitude beats one without; on a tie `a` wins.
pub fn more_northerly<'a, B: GeoBackend>(
    a: &'a PlaceRecord<B>,
    b: &'a PlaceRecord<B>,
) -> &'a PlaceRecord<B> {
    let ordering = match (a.latitude(), b.latitude()) {
        (Some(la), Some(lb)) => la.partial_cmp(&lb).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    };
    if ordering == Ordering::Less {
        b
    } else {
        a
    }
}

/// Formats a non-negative second count the way a duration prints: `H:MM:SS`.
pub fn format_shift(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h}:{m:02}:{s:02}")
}

/// Composes the comparison of two already-resolved records.
///
/// Both offsets are computed against the same `now`.
pub fn compare_records<'a, B: GeoBackend>(
    first: &'a PlaceRecord<B>,
    second: &'a PlaceRecord<B>,
    now: DateTime<Utc>,
) -> ComparisonResult<'a, B> {
    let delta = utc_offset_seconds(first, now) - utc_offset_seconds(second, now);
    ComparisonResult {
        cities: [first, second],
        more_northerly: more_northerly(first, second).name().to_owned(),
        timezone_coincidence: delta == 0,
        offset_delta_seconds: delta,
        time_shifting: format_shift(delta.unsigned_abs()),
    }
}
