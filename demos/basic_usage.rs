//! Basic usage example for craftdb-rs
//!
//! This example walks through loading a catalog, running a filtered search
//! and printing result statistics.

use craftdb_rs::prelude::*;

const DATASET: &str = r#"[
    {"id": "a1", "name": "Kamala Devi", "craft": "Pottery",
     "skills": ["Pottery", "Terracotta"], "location": "Jaipur, Rajasthan",
     "rating": 4.8, "experience": "15 years", "status": "active"},
    {"id": "a2", "name": "Ravi Kumar", "craft": "Weaving",
     "skills": ["Handloom Weaving", "Silk Sarees"], "location": "Varanasi",
     "rating": 4.2, "experience": "8 years", "status": "active"},
    {"id": "j1", "title": "Pottery Instructor", "company": "Craft Collective",
     "skillsRequired": ["Pottery"], "location": "Jaipur",
     "type": "part-time", "salary": "₹20,000 - ₹40,000",
     "postedDate": "2024-02-01", "status": "open"}
]"#;

fn main() -> Result<()> {
    println!("=== craftdb-rs Basic Usage Example ===\n");

    let catalog = Catalog::from_json_str(DATASET)?;
    let stats = catalog.stats();
    println!(
        "Loaded {} records ({} skills, {} locations)\n",
        stats.records, stats.skills, stats.locations
    );

    // A single-clause search: who works with pottery?
    let filter = Filter {
        skills: vec!["pottery".into()],
        ..Filter::default()
    };
    let hits = catalog.search(&filter);
    println!("Records matching skill 'pottery':");
    for r in &hits {
        println!("- {} ({})", r.display_name(), r.location());
    }
    println!();

    // Sort the whole catalog by rating, best first.
    let by_rating = catalog.filter_and_sort(&Filter::new(), "rating", SortOrder::Desc);
    println!("Catalog by rating:");
    for r in &by_rating {
        println!("- {} {:?}", r.display_name(), r.rating);
    }
    println!();

    // Result statistics for a list header.
    let s = catalog.search_stats(hits.len());
    println!(
        "Showing {} of {} records ({}%)",
        s.filtered, s.total, s.percentage
    );

    Ok(())
}
