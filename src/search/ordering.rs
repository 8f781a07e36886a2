//! Default display ordering for the poster grid.
//!
//! Two total orders over the tag-stripped names: newest-first by ingestion
//! timestamp, and natural alphabetical with optional leading-article
//! folding. Search results never pass through here; ranked and default
//! orders are mutually exclusive per request.

use std::cmp::Ordering;

use super::tags;
use crate::config::DisplayConfig;
use crate::types::{PosterItem, SortMode};

/// Leading articles folded away in alphabetical mode, lowercase with the
/// trailing space included.
const ARTICLES: [&str; 3] = ["the ", "a ", "an "];

/// Compare two posters under the given mode.
///
/// DateAdded puts newer ingestion timestamps first; a poster without a
/// timestamp sorts after any poster with one, and a pair with no
/// timestamps at all falls back to alphabetical comparison.
pub fn compare(a: &PosterItem, b: &PosterItem, mode: SortMode, ignore_articles: bool) -> Ordering {
    match mode {
        SortMode::DateAdded => match (
            tags::added_timestamp(&a.filename),
            tags::added_timestamp(&b.filename),
        ) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => compare(a, b, SortMode::Alphabetical, ignore_articles),
        },
        SortMode::Alphabetical => {
            let key_a = comparison_key(a, ignore_articles);
            let key_b = comparison_key(b, ignore_articles);
            natural_cmp(&key_a, &key_b)
        }
    }
}

/// Apply the configured default order over a whole collection.
pub fn sort_posters(items: &[PosterItem], config: &DisplayConfig) -> Vec<PosterItem> {
    let mut ordered = items.to_vec();
    ordered.sort_by(|a, b| compare(a, b, config.sort_mode, config.ignore_articles));
    log::debug!("Sorted {} posters by {:?}", ordered.len(), config.sort_mode);
    ordered
}

/// Cleaned name with at most one leading article removed.
fn comparison_key(item: &PosterItem, ignore_articles: bool) -> String {
    let cleaned = tags::strip_tags(item.stem());
    if ignore_articles {
        let lower = cleaned.to_lowercase();
        for article in ARTICLES {
            if lower.starts_with(article) {
                return cleaned[article.len()..].to_string();
            }
        }
    }
    cleaned
}

/// Case-insensitive comparison where digit runs compare by numeric value,
/// so "Season 2" orders before "Season 10".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(&a, i);
            let end_b = digit_run_end(&b, j);
            let by_value = cmp_digit_runs(&a[i..end_a], &b[j..end_b]);
            if by_value != Ordering::Equal {
                return by_value;
            }
            i = end_a;
            j = end_b;
        } else {
            let by_char = a[i].cmp(&b[j]);
            if by_char != Ordering::Equal {
                return by_char;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Numeric comparison of two digit runs of arbitrary length: strip leading
/// zeros, then shorter run < longer run, then digit-wise.
fn cmp_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(digits: &[char]) -> &[char] {
    let first = digits.iter().position(|&c| c != '0');
    match first {
        Some(idx) => &digits[idx..],
        None => &digits[digits.len()..],
    }
}

#[cfg(test)]
#[path = "tests/ordering_tests.rs"]
mod tests;
