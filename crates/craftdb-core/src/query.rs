// crates/craftdb-core/src/query.rs

//! The filter specification and its predicate.
//!
//! A [`Filter`] is constructed fresh per query. Clauses whose spec value is
//! absent are skipped entirely; clauses whose *record* field is absent fail
//! closed, with two documented exceptions spelled out per clause below.

use serde::{Deserialize, Serialize};

use crate::model::Record;
use crate::parse::{parse_leading_int, parse_salary_range};
use crate::text::{contains_folded, equals_folded, fold_key};

/// Requested salary bounds, compared against a record's parsed
/// `"₹<min> - ₹<max>"` salary string.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SalaryBounds {
    pub min: u64,
    pub max: u64,
}

/// The query: every clause optional, all active clauses ANDed together.
///
/// Within a single clause's own value list (e.g. several skills, several
/// types) matching is OR: any one value suffices.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filter {
    /// Free-text query matched against the record's searchable text blob.
    pub query: Option<String>,
    /// Requested skills; each is matched as a folded substring of the
    /// record's own skill tags.
    pub skills: Vec<String>,
    /// Single location substring.
    pub location: Option<String>,
    /// Accepted record types (case-insensitive membership).
    #[serde(rename = "type")]
    pub kinds: Vec<String>,
    /// Accepted statuses (exact membership).
    #[serde(rename = "status")]
    pub statuses: Vec<String>,
    /// Minimum rating threshold.
    #[serde(rename = "rating")]
    pub min_rating: Option<f64>,
    /// Minimum experience, string-encoded like the record field ("3 years").
    /// A value with no leading integer (e.g. "senior") deactivates the
    /// clause, so every record passes it.
    #[serde(rename = "experience")]
    pub min_experience: Option<String>,
    /// Salary window the record's range must fall inside.
    pub salary_range: Option<SalaryBounds>,
}

impl Filter {
    /// A filter with no active clauses; passes every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no clause is active, i.e. `search` is the identity.
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty())
            && self.skills.is_empty()
            && self.location.as_deref().map_or(true, str::is_empty)
            && self.kinds.is_empty()
            && self.statuses.is_empty()
            && self.min_rating.is_none()
            && self.min_experience.is_none()
            && self.salary_range.is_none()
    }

    /// Evaluate every active clause against `record` (logical AND).
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_query(record)
            && self.matches_skills(record)
            && self.matches_location(record)
            && self.matches_kind(record)
            && self.matches_status(record)
            && self.matches_rating(record)
            && self.matches_experience(record)
            && self.matches_salary(record)
    }

    fn matches_query(&self, record: &Record) -> bool {
        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => record.searchable_text().contains(&fold_key(q)),
        }
    }

    fn matches_skills(&self, record: &Record) -> bool {
        if self.skills.is_empty() {
            return true;
        }
        self.skills.iter().any(|wanted| {
            record
                .all_skills()
                .any(|skill| contains_folded(skill, wanted))
        })
    }

    fn matches_location(&self, record: &Record) -> bool {
        match self.location.as_deref() {
            None | Some("") => true,
            // Absent record location fails the clause.
            Some(wanted) => match record.location.as_deref() {
                Some(loc) => contains_folded(loc, wanted),
                None => false,
            },
        }
    }

    fn matches_kind(&self, record: &Record) -> bool {
        if self.kinds.is_empty() {
            return true;
        }
        match record.kind.as_deref() {
            Some(kind) => self.kinds.iter().any(|k| equals_folded(k, kind)),
            None => false,
        }
    }

    fn matches_status(&self, record: &Record) -> bool {
        if self.statuses.is_empty() {
            return true;
        }
        match record.status.as_deref() {
            Some(status) => self.statuses.iter().any(|s| s == status),
            None => false,
        }
    }

    // Absent rating fails the clause, uniform with the experience clause.
    fn matches_rating(&self, record: &Record) -> bool {
        match self.min_rating {
            None => true,
            Some(min) => record.rating.map_or(false, |r| r >= min),
        }
    }

    fn matches_experience(&self, record: &Record) -> bool {
        let Some(wanted) = self.min_experience.as_deref() else {
            return true;
        };
        let Some(min) = parse_leading_int(wanted) else {
            // An unparsable threshold constrains nothing.
            return true;
        };
        record
            .experience
            .as_deref()
            .and_then(parse_leading_int)
            .map_or(false, |have| have >= min)
    }

    // A record salary that does not parse skips the clause rather than
    // failing it: free-text salaries ("negotiable") are common in the data.
    fn matches_salary(&self, record: &Record) -> bool {
        let Some(bounds) = self.salary_range else {
            return true;
        };
        match record.salary.as_deref().and_then(parse_salary_range) {
            Some((min, max)) => min >= bounds.min && max <= bounds.max,
            None => true,
        }
    }
}

/// Returns the subsequence of `records` (order preserved) for which every
/// active clause of `filter` holds.
///
/// An empty filter is the identity; an empty input collection returns an
/// empty output, never an error.
pub fn search<'a>(records: &'a [Record], filter: &Filter) -> Vec<&'a Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
