//! End-to-end engine behavior over a small marketplace dataset.

use craftdb_core::prelude::*;
use craftdb_core::{filter_and_sort, fuzzy_search, search, sort, suggest};

fn dataset() -> Catalog {
    Catalog::from_json_str(
        r#"[
        {
            "id": "a1", "name": "Kamala Devi", "craft": "Pottery",
            "description": "Third-generation potter from the blue pottery tradition",
            "skills": ["Pottery", "Terracotta"], "location": "Jaipur, Rajasthan",
            "rating": 4.8, "experience": "15 years", "status": "active"
        },
        {
            "id": "a2", "name": "Ravi Kumar", "craft": "Weaving",
            "skills": ["Handloom Weaving", "Silk Sarees"], "location": "Varanasi",
            "rating": 4.2, "experience": "8 years", "status": "active"
        },
        {
            "id": "j1", "title": "Pottery Instructor", "company": "Craft Collective",
            "skillsRequired": ["Pottery"], "location": "Jaipur",
            "type": "part-time", "salary": "₹20,000 - ₹40,000",
            "postedDate": "2024-02-01", "status": "open"
        },
        {
            "id": "j2", "title": "Textile Designer", "company": "Urban Looms",
            "skillsRequired": ["Weaving", "Dyeing"], "location": "Mumbai",
            "type": "full-time", "salary": "₹50,000 - ₹60,000",
            "postedDate": "2024-01-15", "experience": "2 years", "status": "open"
        }
    ]"#,
    )
    .unwrap()
}

fn ids<'a>(hits: &[&'a Record]) -> Vec<&'a str> {
    hits.iter().map(|r| r.id.as_deref().unwrap()).collect()
}

#[test]
fn empty_filter_is_order_preserving_identity() {
    let catalog = dataset();
    let hits = catalog.search(&Filter::new());
    assert_eq!(ids(&hits), ["a1", "a2", "j1", "j2"]);
}

#[test]
fn every_hit_satisfies_each_active_clause() {
    let catalog = dataset();
    let filter = Filter {
        skills: vec!["pottery".into()],
        location: Some("jaipur".into()),
        ..Filter::default()
    };
    let hits = catalog.search(&filter);
    assert_eq!(ids(&hits), ["a1", "j1"]);
    for hit in &hits {
        let skills_only = Filter {
            skills: filter.skills.clone(),
            ..Filter::default()
        };
        let location_only = Filter {
            location: filter.location.clone(),
            ..Filter::default()
        };
        assert!(skills_only.matches(hit));
        assert!(location_only.matches(hit));
    }
}

#[test]
fn salary_window_selects_the_affordable_post() {
    let catalog = dataset();
    let filter = Filter {
        salary_range: Some(SalaryBounds { min: 0, max: 45_000 }),
        ..Filter::default()
    };
    // Records without any salary string skip the clause; of the two posts
    // that carry one, only j1 fits the window.
    let hits = catalog.search(&filter);
    assert_eq!(ids(&hits), ["a1", "a2", "j1"]);
}

#[test]
fn experience_threshold_compares_parsed_years() {
    let catalog = dataset();
    let filter = Filter {
        min_experience: Some("3".into()),
        ..Filter::default()
    };
    let hits = catalog.search(&filter);
    assert_eq!(ids(&hits), ["a1", "a2"]);
}

#[test]
fn filter_and_sort_orders_the_result_only() {
    let catalog = dataset();
    let filter = Filter {
        statuses: vec!["active".into()],
        ..Filter::default()
    };
    let hits = catalog.filter_and_sort(&filter, "rating", SortOrder::Desc);
    assert_eq!(ids(&hits), ["a1", "a2"]);
    // Input collection untouched.
    assert_eq!(catalog.records()[0].id.as_deref(), Some("a1"));
}

#[test]
fn sort_is_idempotent_and_desc_mirrors_asc() {
    let catalog = dataset();
    let asc = sort(catalog.records(), "date", SortOrder::Asc);
    let sorted: Vec<Record> = asc.iter().map(|r| (*r).clone()).collect();
    let again = sort(&sorted, "date", SortOrder::Asc);
    assert_eq!(ids(&asc), ids(&again));

    // Dates are distinct only for the two posts; compare on name instead,
    // where all keys are distinct.
    let by_name_asc = sort(catalog.records(), "name", SortOrder::Asc);
    let mut by_name_desc = sort(catalog.records(), "name", SortOrder::Desc);
    by_name_desc.reverse();
    assert_eq!(ids(&by_name_asc), ids(&by_name_desc));
}

#[test]
fn records_without_dates_rank_at_epoch_zero() {
    let catalog = dataset();
    let hits = sort(catalog.records(), "date", SortOrder::Asc);
    // The two artisans carry no dates and keep their input order up front.
    assert_eq!(ids(&hits), ["a1", "a2", "j2", "j1"]);
}

#[test]
fn facets_cover_the_whole_collection() {
    let catalog = dataset();
    let f = catalog.facets();
    assert_eq!(
        f.skills,
        [
            "Dyeing",
            "Handloom Weaving",
            "Pottery",
            "Silk Sarees",
            "Terracotta",
            "Weaving"
        ]
    );
    assert_eq!(f.types, ["full-time", "part-time"]);
    assert_eq!(f.statuses, ["active", "open"]);
    let mut sorted = f.locations.clone();
    sorted.sort();
    assert_eq!(f.locations, sorted);
}

#[test]
fn suggestions_feed_from_facets() {
    let catalog = dataset();
    let skills = catalog.unique_values(FacetField::Skills);
    let hits = suggest(&skills, "weav", 10);
    assert_eq!(hits, ["Handloom Weaving", "Weaving"]);
    assert!(suggest(&skills, "", 10).is_empty());
}

#[test]
fn result_statistics_round_and_never_divide_by_zero() {
    let catalog = dataset();
    let hits = search(catalog.records(), &Filter {
        statuses: vec!["open".into()],
        ..Filter::default()
    });
    let s = catalog.search_stats(hits.len());
    assert_eq!((s.total, s.filtered, s.percentage), (4, 2, 50));

    let empty = Catalog::default();
    assert_eq!(empty.search_stats(0).percentage, 0);
}

#[test]
fn fuzzy_search_with_empty_query_returns_everything() {
    let catalog = dataset();
    assert_eq!(fuzzy_search(catalog.records(), "", 0.6).len(), 4);
}

#[test]
fn filter_and_sort_free_function_matches_catalog_method() {
    let catalog = dataset();
    let filter = Filter {
        skills: vec!["weav".into()],
        ..Filter::default()
    };
    let a = filter_and_sort(catalog.records(), &filter, "name", SortOrder::Asc);
    let b = catalog.filter_and_sort(&filter, "name", SortOrder::Asc);
    assert_eq!(ids(&a), ids(&b));
}
