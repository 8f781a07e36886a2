//! Embedded-tag stripping for poster filename stems.
//!
//! Poster filenames carry structural metadata: status tokens (`--Plex--`,
//! `--Orphaned--`), library tags (`[[Name]]`), identifier tags (`[id]`)
//! and ingestion timestamps (`(A<epoch seconds>)`). Stripping runs a fixed
//! rule list; `[[...]]` goes before `[...]` so a library tag is never
//! half-eaten as an id tag.

use regex::Regex;
use std::sync::LazyLock;

use crate::{ORPHANED_TAG, PLEX_TAG};

/// Double-bracket library tags, non-greedy.
static RE_LIBRARY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").expect("Invalid regex"));

/// Single-bracket identifier tags, non-greedy.
static RE_ID_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("Invalid regex"));

/// Ingestion timestamps: `(A` followed by 8-12 digits and `)`.
static RE_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(A(\d{8,12})\)").expect("Invalid regex"));

/// One tag-removal step. Rules run in the order they are listed.
enum StripRule {
    /// Literal token removed outright (status markers keep fixed casing).
    Literal(&'static str),
    /// Regex match removed outright.
    Remove(&'static LazyLock<Regex>),
    /// Regex match replaced with a single space so words on either side of
    /// the tag do not concatenate.
    Blank(&'static LazyLock<Regex>),
}

static STRIP_RULES: [StripRule; 5] = [
    StripRule::Literal(PLEX_TAG),
    StripRule::Literal(ORPHANED_TAG),
    StripRule::Remove(&RE_LIBRARY_TAG),
    StripRule::Remove(&RE_ID_TAG),
    StripRule::Blank(&RE_TIMESTAMP),
];

/// Remove every embedded tag from a filename stem, collapse whitespace
/// runs to a single space and trim. Stems without tags pass through
/// unchanged modulo whitespace collapsing.
pub fn strip_tags(stem: &str) -> String {
    let mut result = stem.to_string();
    for rule in &STRIP_RULES {
        result = match rule {
            StripRule::Literal(token) => result.replace(token, ""),
            StripRule::Remove(re) => re.replace_all(&result, "").into_owned(),
            StripRule::Blank(re) => re.replace_all(&result, " ").into_owned(),
        };
    }
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ingestion timestamp embedded in a filename, if any.
pub fn added_timestamp(filename: &str) -> Option<u64> {
    RE_TIMESTAMP
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}

#[cfg(test)]
#[path = "tests/tags_tests.rs"]
mod tests;
