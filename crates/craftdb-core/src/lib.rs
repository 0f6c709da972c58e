// crates/craftdb-core/src/lib.rs

//! craftdb-core — an in-memory search, filter, sort and facet engine for
//! marketplace records (artisans, opportunities, job posts, applicants).
//!
//! Every operation is a pure, synchronous function over caller-owned data:
//! the engine holds no internal state, performs no I/O (the loader is the
//! one I/O boundary) and never mutates the record collection it is given,
//! so it is trivially safe to call from parallel workers.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod facet; // Distinct values, suggestions, result statistics
pub mod fuzzy; // Levenshtein matching over the searchable text
pub mod loader; // The dataset loader (JSON / JSON.gz)
pub mod model; // Record + Catalog
pub mod parse; // String-encoded numeric/date field parsers
pub mod prelude;
pub mod query; // Filter specification + predicate engine
pub mod search; // filter_and_sort / compute_facets composition
pub mod sort; // Sort engine
pub mod text; // Folding helpers
pub mod traits;

// Re-exports
pub use crate::error::{CraftDbError, Result};
pub use crate::facet::{facets, stats, suggest, unique_values, FacetField, Facets, SearchStats};
pub use crate::fuzzy::{fuzzy_search, levenshtein, similarity};
pub use crate::model::{Catalog, CatalogStats, Record};
pub use crate::query::{search, Filter, SalaryBounds};
pub use crate::search::{compute_facets, filter_and_sort};
pub use crate::sort::{sort, SortKey, SortOrder};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
