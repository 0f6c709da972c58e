// crates/craftdb-core/src/text.rs

//! Text folding helpers shared by every matching code path.

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Lälitpur` -> `Lalitpur`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so matching is case-insensitive
/// *and* accent-insensitive.
///
/// # Examples
///
/// ```rust
/// use craftdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Pottery"), "pottery");
/// assert_eq!(fold_key("Jaïpur"), "jaipur");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// Used for the type clause and name lookups, where "Weaving" and "weaving"
/// must be the same value.
///
/// # Examples
///
/// ```rust
/// use craftdb_core::text::equals_folded;
///
/// assert!(equals_folded("Full-Time", "full-time"));
/// assert!(!equals_folded("Pottery", "Weaving"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Folded substring check: does `haystack` contain `needle` once both are
/// folded? Empty needles match everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}
