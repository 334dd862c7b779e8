// crates/gazetteer-core/src/loader/schema.rs

//! The fixed column layout of a GeoNames country dump.
//!
//! Each row is tab separated with exactly [`COLUMN_COUNT`] columns. Every
//! column has an entry in [`SCHEMA`] naming it and saying how it is checked;
//! [`parse_row`] applies the schema and builds a [`PlaceRecord`].

use crate::error::{GazetteerError, Result};
use crate::model::record::canonical_id;
use crate::model::PlaceRecord;
use crate::traits::GeoBackend;
use chrono::NaiveDate;
use chrono_tz::Tz;

pub const COLUMN_COUNT: usize = 19;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a column is validated. Every kind except `Id`, `Name` and `Date`
/// accepts an empty column as "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required unsigned integer.
    Id,
    /// Required, non-blank.
    Name,
    /// Free text, kept verbatim.
    Text,
    /// Decimal number (coordinates).
    Decimal,
    /// Unsigned integer (population).
    Count,
    /// IANA timezone name.
    Zone,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

pub const SCHEMA: [FieldSpec; COLUMN_COUNT] = [
    field("geonameid", FieldKind::Id),
    field("name", FieldKind::Name),
    field("asciiname", FieldKind::Text),
    field("alternatenames", FieldKind::Text),
    field("latitude", FieldKind::Decimal),
    field("longitude", FieldKind::Decimal),
    field("feature_class", FieldKind::Text),
    field("feature_code", FieldKind::Text),
    field("country_code", FieldKind::Text),
    field("cc2", FieldKind::Text),
    field("admin1_code", FieldKind::Text),
    field("admin2_code", FieldKind::Text),
    field("admin3_code", FieldKind::Text),
    field("admin4_code", FieldKind::Text),
    field("population", FieldKind::Count),
    field("elevation", FieldKind::Text),
    field("dem", FieldKind::Text),
    field("timezone", FieldKind::Zone),
    field("modification_date", FieldKind::Date),
];

impl FieldKind {
    fn check(self, raw: &str) -> std::result::Result<(), String> {
        let optional = !matches!(self, FieldKind::Id | FieldKind::Name | FieldKind::Date);
        if raw.is_empty() && optional {
            return Ok(());
        }
        match self {
            FieldKind::Text => Ok(()),
            FieldKind::Id => canonical_id(raw).map(drop),
            FieldKind::Name => {
                if raw.trim().is_empty() {
                    Err("empty".to_string())
                } else {
                    Ok(())
                }
            }
            FieldKind::Decimal => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(()),
                _ => Err(format!("{raw:?} is not a decimal number")),
            },
            FieldKind::Count => raw
                .trim()
                .parse::<u64>()
                .map(drop)
                .map_err(|e| format!("{raw:?} is not an unsigned integer ({e})")),
            FieldKind::Zone => raw
                .parse::<Tz>()
                .map(drop)
                .map_err(|_| format!("unknown timezone {raw:?}")),
            FieldKind::Date => parse_date(raw).map(drop),
        }
    }
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| format!("{raw:?}: {e}"))
}

/// Splits one line into its columns and validates them against [`SCHEMA`].
///
/// `line_no` is only used for error reporting.
pub fn parse_row<B: GeoBackend>(line_no: usize, line: &str) -> Result<PlaceRecord<B>> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() != COLUMN_COUNT {
        return Err(GazetteerError::data_load(
            line_no,
            "row",
            format!("expected {COLUMN_COUNT} columns, found {}", cols.len()),
        ));
    }

    for (field, raw) in SCHEMA.iter().zip(&cols) {
        field
            .kind
            .check(raw)
            .map_err(|reason| GazetteerError::data_load(line_no, field.name, reason))?;
    }

    let opt = |i: usize| (!cols[i].is_empty()).then(|| B::str_from(cols[i]));
    let modification_date = parse_date(cols[18])
        .map_err(|reason| GazetteerError::data_load(line_no, SCHEMA[18].name, reason))?;

    Ok(PlaceRecord {
        geonameid: B::str_from(cols[0]),
        name: B::str_from(cols[1]),
        asciiname: opt(2),
        alternatenames: opt(3),
        latitude: opt(4),
        longitude: opt(5),
        feature_class: opt(6),
        feature_code: opt(7),
        country_code: opt(8),
        cc2: opt(9),
        admin1_code: opt(10),
        admin2_code: opt(11),
        admin3_code: opt(12),
        admin4_code: opt(13),
        population: opt(14),
        elevation: opt(15),
        dem: opt(16),
        timezone: opt(17),
        modification_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultBackend;

    const MOSCOW: &str = "524901\tMoscow\tMoscow\tMoskva,Москва\t55.75222\t37.61556\tP\tPPLC\tRU\t\t48\t\t\t\t10381222\t\t144\tEurope/Moscow\t2022-12-10";

    fn parse(line: &str) -> Result<PlaceRecord<DefaultBackend>> {
        parse_row::<DefaultBackend>(3, line)
    }

    #[test]
    fn schema_covers_every_column() {
        assert_eq!(SCHEMA.len(), COLUMN_COUNT);
        assert_eq!(SCHEMA[0].name, "geonameid");
        assert_eq!(SCHEMA[COLUMN_COUNT - 1].kind, FieldKind::Date);
    }

    #[test]
    fn parses_a_full_row() {
        let r = parse(MOSCOW).unwrap();
        assert_eq!(r.id(), "524901");
        assert_eq!(r.name(), "Moscow");
        assert_eq!(r.alternatenames(), Some("Moskva,Москва"));
        assert_eq!(r.latitude(), Some(55.75222));
        assert_eq!(r.population(), Some(10_381_222));
        assert_eq!(r.timezone(), Some("Europe/Moscow"));
        assert_eq!(r.cc2, None);
        assert_eq!(r.admin_codes(), [Some("48"), None, None, None]);
        assert_eq!(
            r.modification_date(),
            NaiveDate::from_ymd_opt(2022, 12, 10).unwrap()
        );
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse("1\tA\tB").unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataLoad {
                line: 3,
                field: "row",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_date() {
        let line = MOSCOW.replace("2022-12-10", "10.12.2022");
        let err = parse(&line).unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataLoad {
                field: "modification_date",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let bad_id = MOSCOW.replacen("524901", "x1", 1);
        assert!(matches!(
            parse(&bad_id).unwrap_err(),
            GazetteerError::DataLoad {
                field: "geonameid",
                ..
            }
        ));

        let bad_pop = MOSCOW.replace("10381222", "ten");
        assert!(matches!(
            parse(&bad_pop).unwrap_err(),
            GazetteerError::DataLoad {
                field: "population",
                ..
            }
        ));

        let bad_tz = MOSCOW.replace("Europe/Moscow", "Mars/Olympus");
        assert!(matches!(
            parse(&bad_tz).unwrap_err(),
            GazetteerError::DataLoad {
                field: "timezone",
                ..
            }
        ));
    }

    #[test]
    fn ids_must_be_canonical() {
        for spelling in ["+524901", "0524901", " 524901"] {
            let line = MOSCOW.replacen("524901", spelling, 1);
            assert!(
                matches!(
                    parse(&line).unwrap_err(),
                    GazetteerError::DataLoad {
                        field: "geonameid",
                        ..
                    }
                ),
                "{spelling:?}"
            );
        }
        let zero = MOSCOW.replacen("524901", "0", 1);
        assert_eq!(parse(&zero).unwrap().id(), "0");
    }

    #[test]
    fn empty_optional_columns_are_absent() {
        let mut cols: Vec<&str> = MOSCOW.split('\t').collect();
        for i in [2, 3, 4, 5, 14, 17] {
            cols[i] = "";
        }
        let r = parse(&cols.join("\t")).unwrap();
        assert_eq!(r.asciiname(), None);
        assert_eq!(r.latitude(), None);
        assert_eq!(r.population(), None);
        assert_eq!(r.tz(), None);
    }
}
