use clap::{Parser, Subcommand};

/// CLI arguments for craftdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "craftdb",
    version,
    about = "CLI for querying a marketplace record dataset with craftdb-core"
)]
pub struct CliArgs {
    /// Path to the input dataset: a JSON array of records, optionally .json.gz
    #[arg(short = 'i', long = "input", global = true, default_value = "records.json")]
    pub input: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// Filter and sort records
    Search {
        /// Free-text query matched against names, descriptions and skills
        query: Option<String>,

        /// Requested skill (repeatable); any one matching tag suffices
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Location substring (case-insensitive)
        #[arg(long)]
        location: Option<String>,

        /// Accepted record type (repeatable), e.g. full-time
        #[arg(long = "type")]
        kinds: Vec<String>,

        /// Accepted status (repeatable, exact match)
        #[arg(long = "status")]
        statuses: Vec<String>,

        /// Minimum rating, 0-5
        #[arg(long)]
        min_rating: Option<f64>,

        /// Minimum experience, e.g. "3" or "3 years"
        #[arg(long)]
        experience: Option<String>,

        /// Lower salary bound in rupees
        #[arg(long)]
        salary_min: Option<u64>,

        /// Upper salary bound in rupees
        #[arg(long)]
        salary_max: Option<u64>,

        /// Sort key: rating, name, location, experience or date
        #[arg(long, default_value = "name")]
        sort_by: String,

        /// Sort order: asc or desc
        #[arg(long, default_value = "asc")]
        order: String,
    },

    /// List the distinct filterable values present in the dataset
    Facets,

    /// Suggest values of a facet field matching a partial query
    Suggest {
        /// Facet field: skills, locations, types or statuses
        field: String,

        /// Partial value to complete
        query: String,

        /// Maximum number of suggestions
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Edit-distance search tolerant of typos
    Fuzzy {
        /// Query text
        query: String,

        /// Minimum similarity in [0, 1]
        #[arg(long, default_value_t = 0.6)]
        threshold: f64,
    },

    /// Look up records by display name substring
    Name {
        /// Substring to search (case-insensitive)
        query: String,
    },
}
