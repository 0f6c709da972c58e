// crates/craftdb-core/src/search.rs

//! Bulk query composition: predicate first, then ordering.

use crate::facet::{self, Facets};
use crate::model::Record;
use crate::query::{search, Filter};
use crate::sort::{sort_refs, SortOrder};

/// Apply `filter` and then order the result by `sort_by`/`order`.
///
/// This is the call shape result lists are rendered from: the predicate
/// engine produces an order-preserving subsequence, the sort engine reorders
/// it, and neither step mutates the input collection.
pub fn filter_and_sort<'a>(
    records: &'a [Record],
    filter: &Filter,
    sort_by: &str,
    order: SortOrder,
) -> Vec<&'a Record> {
    let mut hits = search(records, filter);
    sort_refs(&mut hits, sort_by, order);
    hits
}

/// Derive the distinct filterable values of `records` for selection UIs.
///
/// Callers re-derive facets whenever the underlying collection changes;
/// typically this runs over the *result* of a query rather than the full
/// catalog.
pub fn compute_facets(records: &[Record]) -> Facets {
    facet::facets(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, skill: &str, rating: f64) -> Record {
        Record {
            name: Some(name.into()),
            skills: vec![skill.into()],
            rating: Some(rating),
            ..Record::default()
        }
    }

    #[test]
    fn filter_then_sort_composes() {
        let records = vec![
            record("low", "Pottery", 2.0),
            record("high", "Pottery", 4.8),
            record("other", "Weaving", 5.0),
        ];
        let filter = Filter {
            skills: vec!["pottery".into()],
            ..Filter::default()
        };
        let hits = filter_and_sort(&records, &filter, "rating", SortOrder::Desc);
        let names: Vec<&str> = hits.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, ["high", "low"]);
    }

    #[test]
    fn unknown_sort_key_keeps_filter_order() {
        let records = vec![
            record("b", "Pottery", 1.0),
            record("a", "Pottery", 2.0),
        ];
        let hits = filter_and_sort(&records, &Filter::new(), "nonsense", SortOrder::Asc);
        let names: Vec<&str> = hits.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn facets_derive_from_the_given_collection() {
        let records = vec![record("x", "Pottery", 1.0)];
        let f = compute_facets(&records);
        assert_eq!(f.skills, ["Pottery"]);
        assert!(f.locations.is_empty());
    }
}
