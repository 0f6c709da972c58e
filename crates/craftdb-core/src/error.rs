// crates/craftdb-core/src/error.rs

//! Error type for the dataset loading boundary.
//!
//! The engine itself is infallible: malformed record fields (unparsable
//! salaries, experience strings, dates) are treated as "absent" by the
//! relevant clause, never surfaced as errors. Only the loader can fail.

use thiserror::Error;

/// Errors produced while locating and parsing a record dataset.
#[derive(Debug, Error)]
pub enum CraftDbError {
    /// The dataset file could not be found or opened.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// The dataset payload could not be read or was not a valid JSON array
    /// of records. Mid-stream I/O failures (including gzip corruption)
    /// surface here too, wrapped by the JSON parser.
    #[cfg(feature = "json")]
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, CraftDbError>;
