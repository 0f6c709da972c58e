#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use craftdb_wasm::{compute_facets, filter_and_sort_records, search_stats, suggest_values};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::JsValue;

fn sample_records() -> JsValue {
    to_value(&serde_json::json!([
        {"id": "a1", "name": "Kamala Devi", "skills": ["Pottery"],
         "location": "Jaipur", "rating": 4.8},
        {"id": "a2", "name": "Ravi Kumar", "skills": ["Weaving"],
         "location": "Varanasi", "rating": 4.2}
    ]))
    .unwrap()
}

#[wasm_bindgen_test]
fn can_filter_and_sort() {
    let filter = to_value(&serde_json::json!({"skills": ["pottery"]})).unwrap();
    let hits = filter_and_sort_records(sample_records(), filter, "rating", "desc").unwrap();
    let hits: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(hits).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], "a1");
}

#[wasm_bindgen_test]
fn can_compute_facets() {
    let facets = compute_facets(sample_records()).unwrap();
    let facets: serde_json::Value = serde_wasm_bindgen::from_value(facets).unwrap();
    assert_eq!(facets["skills"], serde_json::json!(["Pottery", "Weaving"]));
}

#[wasm_bindgen_test]
fn suggestions_come_back_as_js_array() {
    let candidates = to_value(&serde_json::json!(["Pottery", "Weaving", "Embroidery"])).unwrap();
    let hits = suggest_values(candidates, "weav", 10).unwrap();
    assert_eq!(hits.length(), 1);
    assert_eq!(hits.get(0).as_string().as_deref(), Some("Weaving"));
}

#[wasm_bindgen_test]
fn stats_survive_zero_total() {
    let stats = search_stats(0, 0).unwrap();
    let stats: serde_json::Value = serde_wasm_bindgen::from_value(stats).unwrap();
    assert_eq!(stats["percentage"], 0);
}
