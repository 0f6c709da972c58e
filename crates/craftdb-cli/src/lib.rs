//! craftdb-cli
//! ===========
//!
//! Command-line interface for the `craftdb-core` marketplace search engine.
//!
//! This crate primarily provides a binary (`craftdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install craftdb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! craftdb-cli --help
//! craftdb-cli --input records.json stats
//! craftdb-cli search --skill pottery --sort-by rating --order desc
//! craftdb-cli suggest skills weav
//! ```
//!
//! For programmatic access to the engine, use the [`craftdb-core`] crate
//! directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/craftdb-rs/craftdb-rs>
//! - Core crate: <https://docs.rs/craftdb-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
