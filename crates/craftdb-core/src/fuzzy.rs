// crates/craftdb-core/src/fuzzy.rs

//! Edit-distance based fuzzy matching over record text.
//!
//! Full Levenshtein on the concatenated searchable text is fine for the
//! collection sizes this engine targets (a few hundred to low thousands of
//! records); there is no early termination and no index.

use crate::model::Record;
use crate::text::fold_key;

/// Classic dynamic-programming Levenshtein edit distance over `char`s.
///
/// O(n·m) time, O(m) space via a rolling row.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical (similarity 1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    (max_len - levenshtein(a, b)) as f64 / max_len as f64
}

/// Keep the records whose folded searchable text scores at least `threshold`
/// against the folded query.
///
/// An empty or whitespace query returns every record unchanged, regardless
/// of threshold.
pub fn fuzzy_search<'a>(records: &'a [Record], query: &str, threshold: f64) -> Vec<&'a Record> {
    let q = fold_key(query.trim());
    if q.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| similarity(&r.searchable_text(), &q) >= threshold)
        .collect()
}
