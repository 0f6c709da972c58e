// crates/craftdb-core/src/model/mod.rs
pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CatalogStats};
pub use record::Record;
