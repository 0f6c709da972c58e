//! craftdb-cli — Command-line interface for craftdb-core
//!
//! This binary queries a marketplace record dataset (artisans, job posts,
//! opportunities) from the terminal. It supports printing dataset
//! statistics, multi-clause filtered search with sorting, facet listing for
//! filter UIs, incremental suggestions, typo-tolerant fuzzy search, and
//! display-name lookup.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ craftdb --input records.json stats
//!
//! - Filtered, sorted search
//!   $ craftdb search --skill pottery --location jaipur --min-rating 4 \
//!       --sort-by rating --order desc
//!
//! - Free-text plus salary window
//!   $ craftdb search weaver --salary-min 10000 --salary-max 45000
//!
//! - List facet values / complete a partial skill
//!   $ craftdb facets
//!   $ craftdb suggest skills weav
//!
//! - Typo-tolerant search
//!   $ craftdb fuzzy "potttery" --threshold 0.5
//!
//! Data source
//! -----------
//!
//! `--input` points at a JSON array of records using the marketplace wire
//! names (`skillsRequired`, `postedDate`, `type`, ...). Files ending in
//! `.gz` are decompressed transparently.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use craftdb_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let catalog = Catalog::load_from_path(&args.input)?;

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Dataset statistics:");
            println!("  Records: {}", stats.records);
            println!("  Distinct skills: {}", stats.skills);
            println!("  Distinct locations: {}", stats.locations);
        }

        Commands::Search {
            query,
            skills,
            location,
            kinds,
            statuses,
            min_rating,
            experience,
            salary_min,
            salary_max,
            sort_by,
            order,
        } => {
            let salary_range = match (salary_min, salary_max) {
                (None, None) => None,
                (min, max) => Some(SalaryBounds {
                    min: min.unwrap_or(0),
                    max: max.unwrap_or(u64::MAX),
                }),
            };
            let filter = Filter {
                query,
                skills,
                location,
                kinds,
                statuses,
                min_rating,
                min_experience: experience,
                salary_range,
            };
            let order = order.parse::<SortOrder>().unwrap_or_default();

            let hits = catalog.filter_and_sort(&filter, &sort_by, order);
            let stats = catalog.search_stats(hits.len());

            if hits.is_empty() {
                println!("No records matched.");
            } else {
                for r in &hits {
                    print_record(r);
                }
            }
            println!(
                "{} of {} records ({}%)",
                stats.filtered, stats.total, stats.percentage
            );
        }

        Commands::Facets => {
            let f = catalog.facets();
            print_facet("Skills", &f.skills);
            print_facet("Locations", &f.locations);
            print_facet("Types", &f.types);
            print_facet("Statuses", &f.statuses);
        }

        Commands::Suggest {
            field,
            query,
            limit,
        } => match FacetField::parse(&field) {
            Some(field) => {
                let candidates = catalog.unique_values(field);
                let hits = craftdb_core::suggest(&candidates, &query, limit);
                if hits.is_empty() {
                    println!("No suggestions for: {query}");
                } else {
                    for s in hits {
                        println!("{s}");
                    }
                }
            }
            None => {
                eprintln!("Unknown facet field: {field} (expected skills, locations, types or statuses)");
            }
        },

        Commands::Fuzzy { query, threshold } => {
            let hits = catalog.fuzzy_search(&query, threshold);
            if hits.is_empty() {
                println!("No records matched: {query}");
            } else {
                for r in hits {
                    print_record(r);
                }
            }
        }

        Commands::Name { query } => {
            let hits = catalog.find_by_name_substring(&query);
            if hits.is_empty() {
                println!("No records named like: {query}");
            } else {
                for r in hits {
                    print_record(r);
                }
            }
        }
    }

    Ok(())
}

fn print_record(r: &Record) {
    let mut line = r.display_name().to_string();
    if !r.location().is_empty() {
        line.push_str(&format!(" — {}", r.location()));
    }
    let skills: Vec<&str> = r.all_skills().collect();
    if !skills.is_empty() {
        line.push_str(&format!(" [{}]", skills.join(", ")));
    }
    if let Some(rating) = r.rating {
        line.push_str(&format!(" ({rating:.1}★)"));
    }
    println!("{line}");
}

fn print_facet(label: &str, values: &[String]) {
    println!("{label} ({}):", values.len());
    for v in values {
        println!("- {v}");
    }
}
