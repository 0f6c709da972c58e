// crates/craftdb-core/src/sort.rs

//! Stable, type-aware ordering of result sets.
//!
//! Keys are extracted per record with deterministic defaults when the backing
//! field is absent: rating 0.0, names/locations the empty string, experience
//! 0, dates epoch zero. An unrecognized key string leaves the input order
//! untouched.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::Record;
use crate::parse::{parse_leading_int, parse_timestamp};
use crate::text::fold_key;

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// Recognized sort keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Name,
    Location,
    Experience,
    Date,
}

impl SortKey {
    /// Map a key string to a `SortKey`. `"title"` is an alias for the name
    /// key; anything unrecognized is `None` (callers pass the input through
    /// unordered).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Some(Self::Rating),
            "name" | "title" => Some(Self::Name),
            "location" => Some(Self::Location),
            "experience" => Some(Self::Experience),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Rating => {
                let (ka, kb) = (a.rating.unwrap_or(0.0), b.rating.unwrap_or(0.0));
                ka.total_cmp(&kb)
            }
            Self::Name => fold_key(a.display_name()).cmp(&fold_key(b.display_name())),
            Self::Location => fold_key(a.location()).cmp(&fold_key(b.location())),
            Self::Experience => experience_key(a).cmp(&experience_key(b)),
            Self::Date => date_key(a).cmp(&date_key(b)),
        }
    }
}

fn experience_key(r: &Record) -> u32 {
    r.experience
        .as_deref()
        .and_then(parse_leading_int)
        .unwrap_or(0)
}

fn date_key(r: &Record) -> i64 {
    r.sort_date().and_then(parse_timestamp).unwrap_or(0)
}

/// Produce a new ordered collection of references into `records`.
///
/// The sort is stable, so repeated queries over unchanged input are
/// deterministic and records with equal keys keep their input order in both
/// directions.
pub fn sort<'a>(records: &'a [Record], sort_by: &str, order: SortOrder) -> Vec<&'a Record> {
    let mut out: Vec<&Record> = records.iter().collect();
    sort_refs(&mut out, sort_by, order);
    out
}

/// In-place variant over an already-collected result set; used by
/// `filter_and_sort` to avoid re-collecting.
pub(crate) fn sort_refs(records: &mut [&Record], sort_by: &str, order: SortOrder) {
    let Some(key) = SortKey::parse(sort_by) else {
        return;
    };
    records.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rating: Option<f64>, date: Option<&str>) -> Record {
        Record {
            name: Some(name.into()),
            rating,
            posted_date: date.map(Into::into),
            ..Record::default()
        }
    }

    fn names(hits: &[&Record]) -> Vec<String> {
        hits.iter().map(|r| r.display_name().to_string()).collect()
    }

    #[test]
    fn rating_sort_defaults_absent_to_zero() {
        let records = vec![
            record("a", Some(3.0), None),
            record("b", None, None),
            record("c", Some(4.5), None),
        ];
        let hits = sort(&records, "rating", SortOrder::Asc);
        assert_eq!(names(&hits), ["b", "a", "c"]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let records = vec![
            record("ravi", None, None),
            record("Anita", None, None),
            record("meena", None, None),
        ];
        let hits = sort(&records, "name", SortOrder::Asc);
        assert_eq!(names(&hits), ["Anita", "meena", "ravi"]);
    }

    #[test]
    fn title_is_an_alias_for_name() {
        assert_eq!(SortKey::parse("title"), Some(SortKey::Name));
    }

    #[test]
    fn unknown_key_is_passthrough() {
        let records = vec![
            record("z", Some(1.0), None),
            record("a", Some(2.0), None),
        ];
        let hits = sort(&records, "relevance", SortOrder::Desc);
        assert_eq!(names(&hits), ["z", "a"]);
    }

    #[test]
    fn descending_reverses_distinct_keys() {
        let records = vec![
            record("a", Some(1.0), None),
            record("b", Some(3.0), None),
            record("c", Some(2.0), None),
        ];
        let asc = names(&sort(&records, "rating", SortOrder::Asc));
        let mut desc = names(&sort(&records, "rating", SortOrder::Desc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn sorting_is_idempotent() {
        let records = vec![
            record("b", Some(2.0), None),
            record("a", Some(1.0), None),
            record("c", Some(1.0), None),
        ];
        let once = names(&sort(&records, "rating", SortOrder::Asc));
        let sorted: Vec<Record> = sort(&records, "rating", SortOrder::Asc)
            .into_iter()
            .cloned()
            .collect();
        let twice = names(&sort(&sorted, "rating", SortOrder::Asc));
        assert_eq!(once, twice);
    }

    #[test]
    fn date_sort_treats_missing_dates_as_epoch_zero() {
        let records = vec![
            record("new", None, Some("2024-02-01")),
            record("undated-1", None, None),
            record("undated-2", None, None),
            record("old", None, Some("2023-01-01")),
        ];
        let hits = sort(&records, "date", SortOrder::Asc);
        // Undated records rank together at epoch zero, in stable input order.
        assert_eq!(names(&hits), ["undated-1", "undated-2", "old", "new"]);
    }

    #[test]
    fn experience_sort_parses_leading_digits() {
        let mut a = record("junior", None, None);
        a.experience = Some("2 years".into());
        let mut b = record("senior", None, None);
        b.experience = Some("12 years".into());
        let mut c = record("unknown", None, None);
        c.experience = Some("n/a".into());
        let records = vec![a, b, c];
        let hits = sort(&records, "experience", SortOrder::Desc);
        assert_eq!(names(&hits), ["senior", "junior", "unknown"]);
    }

    #[test]
    fn sort_order_parses_common_spellings() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
