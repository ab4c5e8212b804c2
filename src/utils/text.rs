//! Case-insensitive text helpers.
//!
//! Catalog labels are French and carry accents, so comparisons go through
//! Unicode lowercasing rather than ASCII-only folding.

/// Unicode lowercase copy.
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality.
pub fn eq_ci(a: &str, b: &str) -> bool {
    a == b || lower(a) == lower(b)
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    lower(haystack).contains(&lower(needle))
}
