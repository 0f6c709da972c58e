//! Error handling example for craftdb-rs
//!
//! This example demonstrates the loader's error surface and how the engine
//! treats malformed record fields as absent rather than failing.

use craftdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== craftdb-rs Error Handling Example ===\n");

    // Example 1: loading a dataset that does not exist
    println!("--- Example 1: missing dataset file ---");
    match Catalog::load_from_path("/nonexistent/records.json") {
        Ok(catalog) => println!("✓ Loaded {} records", catalog.len()),
        Err(e) => println!("✗ Expected failure: {e}"),
    }
    println!();

    // Example 2: malformed JSON payloads
    println!("--- Example 2: malformed JSON ---");
    match Catalog::from_json_str("{\"not\": \"an array\"}") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("✗ Expected failure: {e}"),
    }
    println!();

    // Example 3: malformed record *fields* never error — the clause just
    // treats them as absent.
    println!("--- Example 3: unparsable fields fail or skip clauses ---");
    let catalog = Catalog::from_json_str(
        r#"[
        {"id": "ok", "name": "Kamala", "experience": "5 years",
         "salary": "₹20,000 - ₹40,000"},
        {"id": "vague", "name": "Ravi", "experience": "senior",
         "salary": "negotiable"}
    ]"#,
    )?;

    let filter = Filter {
        min_experience: Some("3".into()),
        ..Filter::default()
    };
    let hits = catalog.search(&filter);
    println!("experience >= 3 matches: {}", hits.len());
    for r in &hits {
        println!(
            "- {} (unparsable experience fails the clause)",
            r.display_name()
        );
    }

    let filter = Filter {
        salary_range: Some(SalaryBounds { min: 0, max: 45_000 }),
        ..Filter::default()
    };
    let hits = catalog.search(&filter);
    println!(
        "salary in window matches: {} (unparsable salary skips)",
        hits.len()
    );
    println!();

    // Example 4: queries over an empty catalog are valid, not errors
    println!("--- Example 4: empty catalog ---");
    let empty = Catalog::default();
    println!("search hits: {}", empty.search(&Filter::new()).len());
    println!("stats: {:?}", empty.search_stats(0));

    Ok(())
}
