//! craftdb prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::error::{CraftDbError, Result};
pub use crate::facet::{FacetField, Facets, SearchStats};
pub use crate::model::{Catalog, CatalogStats, Record};
pub use crate::query::{Filter, SalaryBounds};
pub use crate::sort::{SortKey, SortOrder};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
