//! Text normalization for catalog strings.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex pattern for runs of whitespace (including no-break spaces).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize catalog text.
///
/// Applies NFKC (the catalog writes `CS&nbsp;1200`, which must compare equal
/// to `CS 1200`), collapses whitespace runs to a single space and trims.
///
/// # Examples
/// ```
/// use degreeplan_harvester::text::normalize_text;
///
/// assert_eq!(normalize_text("  CS\u{a0}1200\n "), "CS 1200");
/// ```
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    WHITESPACE_RUN
        .replace_all(&composed, " ")
        .trim()
        .to_string()
}

/// Whether text has no visible content.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
