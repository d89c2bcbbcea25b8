//! String normalization for incident fields.
//!
//! Source feeds disagree on casing and spacing ("downtown", "DOWNTOWN",
//! "Downtown  "), which would split one location across several frequency
//! table keys. Normalizing once at the ingest boundary keeps every
//! downstream aggregation keyed on a single canonical form.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse runs of whitespace into a single space.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes a categorical field (crime type or location).
///
/// The pipeline:
/// 1. Trim
/// 2. Collapse internal whitespace
/// 3. Title Case each word
#[must_use]
pub fn clean_field(input: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(input.trim(), " ");
    title_case(&collapsed)
}

/// Title Cases each space-separated word: first letter uppercased, the
/// rest lowercased.
#[must_use]
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
