// crates/craftdb-core/src/model/catalog.rs

use serde::{Deserialize, Serialize};

use crate::facet::{self, FacetField, Facets, SearchStats};
use crate::fuzzy;
use crate::model::Record;
use crate::query::{self, Filter};
use crate::search;
use crate::sort::SortOrder;
use crate::traits::NameMatch;

/// Simple aggregate statistics for a catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub records: usize,
    pub skills: usize,
    pub locations: usize,
}

/// An owning collection of records with the engine operations as methods.
///
/// The engine itself is a set of pure functions over `&[Record]`; `Catalog`
/// is the convenience wrapper the CLI and demos work with. It never mutates
/// its records — every operation returns a fresh collection of references.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let f = self.facets();
        CatalogStats {
            records: self.records.len(),
            skills: f.skills.len(),
            locations: f.locations.len(),
        }
    }

    /// Predicate engine: see [`crate::query::search`].
    pub fn search(&self, filter: &Filter) -> Vec<&Record> {
        query::search(&self.records, filter)
    }

    /// Predicate then sort: see [`crate::search::filter_and_sort`].
    pub fn filter_and_sort(&self, filter: &Filter, sort_by: &str, order: SortOrder) -> Vec<&Record> {
        search::filter_and_sort(&self.records, filter, sort_by, order)
    }

    pub fn facets(&self) -> Facets {
        facet::facets(&self.records)
    }

    pub fn unique_values(&self, field: FacetField) -> Vec<String> {
        facet::unique_values(&self.records, field)
    }

    /// Statistics for a result set drawn from this catalog.
    pub fn search_stats(&self, filtered: usize) -> SearchStats {
        facet::stats(self.records.len(), filtered)
    }

    /// Edit-distance matching: see [`crate::fuzzy::fuzzy_search`].
    pub fn fuzzy_search(&self, query: &str, threshold: f64) -> Vec<&Record> {
        fuzzy::fuzzy_search(&self.records, query, threshold)
    }

    /// First record whose display name equals `q` after folding.
    pub fn find_by_name(&self, q: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.is_named(q))
    }

    /// All records whose display name contains `q` after folding.
    pub fn find_by_name_substring(&self, q: &str) -> Vec<&Record> {
        if q.trim().is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.name_contains(q))
            .collect()
    }
}
