// crates/gazetteer-core/src/model/record.rs
use crate::traits::GeoBackend;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One row of the gazetteer dump.
///
/// Records are immutable once loaded. Numeric columns keep their original
/// spelling and are parsed on demand by the accessors; the loader has
/// already checked that they parse.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceRecord<B: GeoBackend> {
    pub geonameid: B::Str,
    pub name: B::Str,
    pub asciiname: Option<B::Str>,
    pub alternatenames: Option<B::Str>,
    pub latitude: Option<B::Str>,
    pub longitude: Option<B::Str>,
    pub feature_class: Option<B::Str>,
    pub feature_code: Option<B::Str>,
    pub country_code: Option<B::Str>,
    pub cc2: Option<B::Str>,
    pub admin1_code: Option<B::Str>,
    pub admin2_code: Option<B::Str>,
    pub admin3_code: Option<B::Str>,
    pub admin4_code: Option<B::Str>,
    pub population: Option<B::Str>,
    pub elevation: Option<B::Str>,
    pub dem: Option<B::Str>,
    pub timezone: Option<B::Str>,
    pub modification_date: NaiveDate,
}

/// Parses a `geonameid`, accepting only its canonical decimal spelling.
///
/// `+7` and `007` would parse to the same number as `7` but could never be
/// reached by a numeric lookup, so they are rejected.
pub fn canonical_id(raw: &str) -> std::result::Result<u64, String> {
    let id = raw
        .parse::<u64>()
        .map_err(|e| format!("{raw:?} is not an unsigned integer ({e})"))?;
    if id.to_string() != raw {
        return Err(format!("{raw:?} is not written in canonical form ({id})"));
    }
    Ok(id)
}

fn opt_str<S: AsRef<str>>(v: &Option<S>) -> Option<&str> {
    v.as_ref().map(|s| s.as_ref())
}

impl<B: GeoBackend> PlaceRecord<B> {
    pub fn id(&self) -> &str {
        self.geonameid.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn asciiname(&self) -> Option<&str> {
        opt_str(&self.asciiname)
    }

    /// Comma separated alternate spellings, verbatim.
    pub fn alternatenames(&self) -> Option<&str> {
        opt_str(&self.alternatenames)
    }

    pub fn country_code(&self) -> &str {
        opt_str(&self.country_code).unwrap_or("")
    }

    pub fn feature_code(&self) -> Option<&str> {
        opt_str(&self.feature_code)
    }

    /// Administrative division codes, first to fourth order.
    pub fn admin_codes(&self) -> [Option<&str>; 4] {
        [
            opt_str(&self.admin1_code),
            opt_str(&self.admin2_code),
            opt_str(&self.admin3_code),
            opt_str(&self.admin4_code),
        ]
    }

    pub fn latitude(&self) -> Option<f64> {
        opt_str(&self.latitude).and_then(|v| v.trim().parse().ok())
    }

    pub fn longitude(&self) -> Option<f64> {
        opt_str(&self.longitude).and_then(|v| v.trim().parse().ok())
    }

    pub fn population(&self) -> Option<u64> {
        opt_str(&self.population).and_then(|v| v.trim().parse().ok())
    }

    pub fn timezone(&self) -> Option<&str> {
        opt_str(&self.timezone)
    }

    /// The IANA zone, if present and known.
    pub fn tz(&self) -> Option<Tz> {
        self.timezone().and_then(|z| z.parse().ok())
    }

    pub fn modification_date(&self) -> NaiveDate {
        self.modification_date
    }
}
