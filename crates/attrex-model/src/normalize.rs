//! Text normalization for extracted cell values.
//!
//! All values are transliterated to plain ASCII before use, matching the
//! conventions the specification documents follow (shortname cells
//! occasionally carry decorative `*` markers and non-ASCII punctuation).

use deunicode::deunicode;

/// Transliterate to plain ASCII, dropping diacritics.
pub fn transliterate(value: &str) -> String {
    deunicode(value)
}

/// Normalize a long attribute name: transliterate and trim.
pub fn normalize_attribute(value: &str) -> String {
    deunicode(value).trim().to_string()
}

/// Normalize a shortname into its aggregation key: transliterate, remove
/// all `*` markers, trim, lowercase. An empty result means the row
/// carries no usable shortname and must be skipped by the caller.
pub fn normalize_shortname(value: &str) -> String {
    deunicode(value).replace('*', "").trim().to_lowercase()
}

/// Split an "Occurs in" cell into its context labels: comma-separated,
/// each piece trimmed; empty pieces are dropped.
pub fn split_occurs_in(value: &str) -> Vec<String> {
    deunicode(value)
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToString::to_string)
        .collect()
}
