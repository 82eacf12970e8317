//! Input normalization applied before any n-gram work.

/// Lowercase and trim leading/trailing whitespace.
///
/// Internal whitespace, punctuation and Unicode composition are left as-is.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
