// crates/craftdb-core/src/facet.rs

//! Facet extraction, suggestion lookups and result statistics.
//!
//! Facets are the distinct values of a filterable dimension across the
//! current collection, re-derived whenever the collection changes and used
//! to populate selection UIs.

use serde::{Deserialize, Serialize};

use crate::model::Record;
use crate::text::fold_key;

/// A filterable dimension whose distinct values can be extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacetField {
    /// Union of `skills` and `skillsRequired` tags.
    Skills,
    Locations,
    Types,
    Statuses,
}

impl FacetField {
    /// Map a field name to a facet. Accepts singular and plural spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skill" | "skills" => Some(Self::Skills),
            "location" | "locations" => Some(Self::Locations),
            "type" | "types" => Some(Self::Types),
            "status" | "statuses" => Some(Self::Statuses),
            _ => None,
        }
    }
}

/// Distinct values per facet, each sorted and de-duplicated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Facets {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub types: Vec<String>,
    pub statuses: Vec<String>,
}

/// Result-set statistics for display alongside a filtered list.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchStats {
    pub total: usize,
    pub filtered: usize,
    /// `round(filtered / total * 100)`, 0 when `total` is 0.
    pub percentage: u32,
}

/// Collect the sorted, de-duplicated, non-empty values of `field` across
/// `records`.
pub fn unique_values(records: &[Record], field: FacetField) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        match field {
            FacetField::Skills => {
                out.extend(r.all_skills().filter(|s| !s.is_empty()).map(String::from));
            }
            FacetField::Locations => push_nonempty(&mut out, r.location.as_deref()),
            FacetField::Types => push_nonempty(&mut out, r.kind.as_deref()),
            FacetField::Statuses => push_nonempty(&mut out, r.status.as_deref()),
        }
    }
    out.sort();
    out.dedup();
    out
}

fn push_nonempty(out: &mut Vec<String>, value: Option<&str>) {
    if let Some(v) = value {
        if !v.is_empty() {
            out.push(v.to_string());
        }
    }
}

/// Derive every facet of `records` in one pass per dimension.
pub fn facets(records: &[Record]) -> Facets {
    Facets {
        skills: unique_values(records, FacetField::Skills),
        locations: unique_values(records, FacetField::Locations),
        types: unique_values(records, FacetField::Types),
        statuses: unique_values(records, FacetField::Statuses),
    }
}

/// Case-insensitive substring filter over `candidates` for incremental
/// search boxes.
///
/// Candidate order is preserved and the result is truncated to `limit`.
/// An empty or whitespace-only query yields no suggestions.
pub fn suggest<'a>(candidates: &'a [String], query: &str, limit: usize) -> Vec<&'a str> {
    let q = fold_key(query.trim());
    if q.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|c| fold_key(c).contains(&q))
        .take(limit)
        .map(String::as_str)
        .collect()
}

/// Pure arithmetic over result counts; no failure modes.
pub fn stats(total: usize, filtered: usize) -> SearchStats {
    let percentage = if total > 0 {
        ((filtered as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };
    SearchStats {
        total,
        filtered,
        percentage,
    }
}
