//! Advanced filtering example for craftdb-rs
//!
//! This example demonstrates multi-clause filters, facet extraction,
//! suggestions and fuzzy search.

use craftdb_rs::prelude::*;

const DATASET: &str = r#"[
    {"id": "a1", "name": "Kamala Devi", "craft": "Pottery",
     "skills": ["Pottery", "Terracotta"], "location": "Jaipur, Rajasthan",
     "rating": 4.8, "experience": "15 years", "status": "active"},
    {"id": "a2", "name": "Ravi Kumar", "craft": "Weaving",
     "skills": ["Handloom Weaving", "Silk Sarees"], "location": "Varanasi",
     "rating": 4.2, "experience": "8 years", "status": "active"},
    {"id": "a3", "name": "Meena Kumari", "craft": "Painting",
     "skills": ["Madhubani Painting"], "location": "Madhubani, Bihar",
     "rating": 3.9, "experience": "4 years", "status": "pending"},
    {"id": "j1", "title": "Pottery Instructor", "company": "Craft Collective",
     "skillsRequired": ["Pottery"], "location": "Jaipur",
     "type": "part-time", "salary": "₹20,000 - ₹40,000",
     "postedDate": "2024-02-01", "status": "open"},
    {"id": "j2", "title": "Textile Designer", "company": "Urban Looms",
     "skillsRequired": ["Weaving", "Dyeing"], "location": "Mumbai",
     "type": "full-time", "salary": "₹50,000 - ₹60,000",
     "postedDate": "2024-01-15", "experience": "2 years", "status": "open"}
]"#;

fn main() -> Result<()> {
    println!("=== craftdb-rs Advanced Filtering Example ===\n");

    let catalog = Catalog::from_json_str(DATASET)?;

    // Example 1: conjunction of clauses — experienced, well-rated artisans
    println!("--- Example 1: rating >= 4 AND experience >= 5 years ---");
    let filter = Filter {
        min_rating: Some(4.0),
        min_experience: Some("5".into()),
        ..Filter::default()
    };
    for r in catalog.search(&filter) {
        println!(
            "- {} ({:?}, {})",
            r.display_name(),
            r.rating,
            r.experience.as_deref().unwrap_or("-")
        );
    }
    println!();

    // Example 2: salary window over the job posts
    println!("--- Example 2: posts paying within ₹0 - ₹45,000 ---");
    let filter = Filter {
        statuses: vec!["open".into()],
        salary_range: Some(SalaryBounds { min: 0, max: 45_000 }),
        ..Filter::default()
    };
    for r in catalog.search(&filter) {
        println!(
            "- {} ({})",
            r.display_name(),
            r.salary.as_deref().unwrap_or("-")
        );
    }
    println!();

    // Example 3: facets for a filter UI
    println!("--- Example 3: facet values ---");
    let facets = catalog.facets();
    println!("Skills: {:?}", facets.skills);
    println!("Types: {:?}", facets.types);
    println!("Statuses: {:?}", facets.statuses);
    println!();

    // Example 4: incremental suggestions from the skills facet
    println!("--- Example 4: completing 'weav' ---");
    let skills = catalog.unique_values(FacetField::Skills);
    for s in craftdb_rs::suggest(&skills, "weav", 5) {
        println!("- {s}");
    }
    println!();

    // Example 5: fuzzy search tolerates typos
    println!("--- Example 5: fuzzy search for 'madhubani painitng' ---");
    for r in catalog.fuzzy_search("madhubani painitng", 0.4) {
        println!("- {}", r.display_name());
    }

    Ok(())
}
