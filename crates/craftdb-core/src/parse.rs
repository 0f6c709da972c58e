// crates/craftdb-core/src/parse.rs

//! Parsers for the string-encoded numeric fields records carry.
//!
//! Records arrive with values like `"5 years"`, `"₹20,000 - ₹40,000"` or
//! `"2024-03-01"`. Each parser here returns `Option`: `None` means "treat the
//! field as absent", which the filter clauses translate into their documented
//! skip/fail behavior. Nothing in this module panics or errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the leading digit run of a string, skipping any non-digit prefix.
///
/// `"5 years"` → `Some(5)`, `"approx. 12 yrs"` → `Some(12)`, `"senior"` →
/// `None`. Only the first contiguous run of ASCII digits is read, so
/// `"3-5 years"` parses as `3`.
pub fn parse_leading_int(s: &str) -> Option<u32> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Parse a salary range of the form `"₹<min> - ₹<max>"`.
///
/// Commas are stripped and the currency glyph is ignored, so
/// `"₹20,000 - ₹40,000"` → `Some((20000, 40000))`. Both bounds must be
/// present; a single figure or free text yields `None`.
pub fn parse_salary_range(s: &str) -> Option<(u64, u64)> {
    let cleaned = s.replace(',', "");
    let mut parts = cleaned.splitn(2, '-');
    let min = parse_leading_u64(parts.next()?)?;
    let max = parse_leading_u64(parts.next()?)?;
    Some((min, max))
}

fn parse_leading_u64(s: &str) -> Option<u64> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Parse a date string into epoch milliseconds.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`), a plain datetime
/// (`2024-03-01 10:00:00`) or a bare date (`2024-03-01`). Anything else is
/// `None`; the sort engine maps that to epoch zero.
pub fn parse_timestamp(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}
