// crates/craftdb-core/src/loader.rs

//! # Dataset Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates payload
//! parsing to serde. Datasets are JSON arrays of records, optionally
//! gzip-compressed (`.json.gz`), which is how the marketplace exports them.

#![cfg(feature = "json")]

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{CraftDbError, Result};
use crate::model::{Catalog, Record};

impl Catalog {
    /// Load a catalog from a JSON (or `.json.gz`) dataset on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        Self::from_reader(reader)
    }

    /// Parse a catalog from any reader yielding a JSON array of records.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    /// Parse a catalog from JSON text already in memory.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(s)?;
        Ok(Self::new(records))
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a gzip decoder when the
/// extension says so. Returns a generic reader so the caller doesn't care
/// about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CraftDbError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(CraftDbError::NotFound(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
