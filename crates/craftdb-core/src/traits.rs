// crates/craftdb-core/src/traits.rs
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode-aware, accent-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide a
/// `&str` view of their canonical name via [`NameMatch::name_str`], and get
/// convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use craftdb_core::traits::NameMatch;
///
/// struct Artisan(&'static str);
/// impl NameMatch for Artisan {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Artisan("Kamala Devi").is_named("kamala devi"));
/// assert!(Artisan("Kamala Devi").name_contains("kamala"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for crate::model::Record {
    fn name_str(&self) -> &str {
        self.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn record_name_match_uses_display_name() {
        let r = Record {
            title: Some("Handloom Weaver Wanted".into()),
            ..Record::default()
        };
        assert!(r.is_named("handloom weaver wanted"));
        assert!(r.name_contains("WEAVER"));
        assert!(!r.name_contains("potter"));
    }
}
