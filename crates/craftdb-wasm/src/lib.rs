//! craftdb-wasm — WebAssembly bindings for craftdb-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `craftdb-core`. The record collection lives on the JavaScript side (the
//! marketplace front end already holds it for rendering); every function
//! takes the records as a JSON-serializable array and returns plain
//! JSON-serializable values.
//!
//! What it provides
//! ----------------
//! - `search_records(records, filter)` — multi-clause filtering
//! - `filter_and_sort_records(records, filter, sortBy, order)` — bulk query
//! - `compute_facets(records)` — `{skills, locations, types, statuses}`
//! - `suggest_values(candidates, query, limit)` — incremental completion
//! - `fuzzy_search_records(records, query, threshold)` — typo tolerance
//! - `search_stats(total, filtered)` — `{total, filtered, percentage}`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { filter_and_sort_records, compute_facets } from 'craftdb-wasm';
//!
//! async function main() {
//!   await init();
//!   const records = await fetch('/api/artisans').then(r => r.json());
//!
//!   const hits = filter_and_sort_records(
//!     records,
//!     { skills: ['pottery'], location: 'jaipur' },
//!     'rating',
//!     'desc',
//!   );
//!   console.log(hits, compute_facets(records));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Filters use the marketplace wire names (`type`, `status`, `rating`,
//!   `experience`, `salaryRange: {min, max}`); omitted clauses constrain
//!   nothing.
//! - All exported functions are `wasm_bindgen` bindings returning plain
//!   JS arrays/objects; malformed input surfaces as a thrown JS error, not
//!   a panic.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use craftdb_core::{facet, fuzzy, query, search};
use craftdb_core::{Filter, Record, SortOrder};
use serde_wasm_bindgen::{from_value, to_value};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"craftdb-wasm initialized".into());
}

fn parse_records(records: JsValue) -> Result<Vec<Record>, JsValue> {
    from_value(records).map_err(|e| JsValue::from_str(&format!("invalid records array: {e}")))
}

fn parse_filter(filter: JsValue) -> Result<Filter, JsValue> {
    if filter.is_undefined() || filter.is_null() {
        return Ok(Filter::new());
    }
    from_value(filter).map_err(|e| JsValue::from_str(&format!("invalid filter: {e}")))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("serialization failed: {e}")))
}

/* --------------------------------------------------------------------------
   Filtering and sorting
-------------------------------------------------------------------------- */

/// Apply a filter specification; returns the matching records in input order.
#[wasm_bindgen]
pub fn search_records(records: JsValue, filter: JsValue) -> Result<JsValue, JsValue> {
    let records = parse_records(records)?;
    let filter = parse_filter(filter)?;
    let hits: Vec<&Record> = query::search(&records, &filter);
    to_js(&hits)
}

/// Filter then sort; `order` is `"asc"` or `"desc"`, an unknown `sort_by`
/// keeps the filtered order.
#[wasm_bindgen]
pub fn filter_and_sort_records(
    records: JsValue,
    filter: JsValue,
    sort_by: &str,
    order: &str,
) -> Result<JsValue, JsValue> {
    let records = parse_records(records)?;
    let filter = parse_filter(filter)?;
    let order = order.parse::<SortOrder>().unwrap_or_default();
    let hits = search::filter_and_sort(&records, &filter, sort_by, order);
    to_js(&hits)
}

/* --------------------------------------------------------------------------
   Facets, suggestions, statistics
-------------------------------------------------------------------------- */

/// Distinct filterable values across the collection, for filter UI controls.
#[wasm_bindgen]
pub fn compute_facets(records: JsValue) -> Result<JsValue, JsValue> {
    let records = parse_records(records)?;
    to_js(&facet::facets(&records))
}

/// Case-insensitive substring completion over a candidate list. Returns a
/// native JS array of strings.
#[wasm_bindgen]
pub fn suggest_values(candidates: JsValue, query: &str, limit: usize) -> Result<Array, JsValue> {
    let candidates: Vec<String> = from_value(candidates)
        .map_err(|e| JsValue::from_str(&format!("invalid candidates array: {e}")))?;
    Ok(facet::suggest(&candidates, query, limit)
        .into_iter()
        .map(JsValue::from_str)
        .collect())
}

/// `{total, filtered, percentage}` for a result list header.
#[wasm_bindgen]
pub fn search_stats(total: usize, filtered: usize) -> Result<JsValue, JsValue> {
    to_js(&facet::stats(total, filtered))
}

/* --------------------------------------------------------------------------
   Fuzzy search
-------------------------------------------------------------------------- */

/// Edit-distance search over the records' searchable text; an empty query
/// returns every record.
#[wasm_bindgen]
pub fn fuzzy_search_records(
    records: JsValue,
    query: &str,
    threshold: f64,
) -> Result<JsValue, JsValue> {
    let records = parse_records(records)?;
    let hits = fuzzy::fuzzy_search(&records, query, threshold);
    to_js(&hits)
}
