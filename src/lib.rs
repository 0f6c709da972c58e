//! craftdb-rs
//! ==========
//!
//! Workspace umbrella crate. The actual library lives in `craftdb-core`;
//! this crate re-exports it so the demo programs under `demos/` have a
//! single dependency line. See the member crates for the real API surface:
//!
//! - `craftdb-core` — record model, filter/sort/facet engine, fuzzy search
//! - `craftdb-cli` — command-line front end
//! - `craftdb-wasm` — WebAssembly bindings

pub use craftdb_core::*;
