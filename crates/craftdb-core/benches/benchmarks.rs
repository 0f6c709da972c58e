//! Engine benchmarks over a synthetic catalog in the low-thousands range,
//! the collection size the design targets.

use criterion::{criterion_group, criterion_main, Criterion};

use craftdb_core::prelude::*;
use craftdb_core::{filter_and_sort, fuzzy_search, search};

const SKILLS: &[&str] = &[
    "Pottery",
    "Terracotta",
    "Handloom Weaving",
    "Block Printing",
    "Wood Carving",
    "Bamboo Craft",
    "Madhubani Painting",
    "Silk Sarees",
];

const LOCATIONS: &[&str] = &["Jaipur", "Varanasi", "Mumbai", "Channapatna", "Bhuj"];

fn synthetic_catalog(n: usize) -> Catalog {
    let records = (0..n)
        .map(|i| Record {
            id: Some(format!("r{i}")),
            name: Some(format!("Artisan {i}")),
            description: Some(format!("Practitioner of {}", SKILLS[i % SKILLS.len()])),
            skills: vec![SKILLS[i % SKILLS.len()].to_string()],
            location: Some(LOCATIONS[i % LOCATIONS.len()].to_string()),
            rating: Some((i % 50) as f64 / 10.0),
            experience: Some(format!("{} years", i % 30)),
            salary: Some(format!("₹{},000 - ₹{},000", 10 + i % 20, 30 + i % 40)),
            status: Some(if i % 3 == 0 { "active" } else { "pending" }.to_string()),
            ..Record::default()
        })
        .collect();
    Catalog::new(records)
}

fn bench_search(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    let filter = Filter {
        skills: vec!["weaving".into()],
        location: Some("varanasi".into()),
        min_rating: Some(2.0),
        ..Filter::default()
    };

    c.bench_function("search_2k_multi_clause", |b| {
        b.iter(|| search(catalog.records(), &filter))
    });

    c.bench_function("filter_and_sort_2k_by_rating", |b| {
        b.iter(|| filter_and_sort(catalog.records(), &filter, "rating", SortOrder::Desc))
    });
}

fn bench_facets(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    c.bench_function("facets_2k", |b| b.iter(|| catalog.facets()));
}

fn bench_fuzzy(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    c.bench_function("fuzzy_500_threshold_0_4", |b| {
        b.iter(|| fuzzy_search(catalog.records(), "madhubani painitng", 0.4))
    });
}

criterion_group!(benches, bench_search, bench_facets, bench_fuzzy);
criterion_main!(benches);
