//! Case-insensitive name matching shared by recipe and cookbook lookups.

/// Compares two names ignoring case.
///
/// Uses full Unicode lowercasing so non-ASCII names ("Яйца" / "яйца") match.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.to_lowercase() == b.to_lowercase()
}
