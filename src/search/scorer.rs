//! Tiered relevance scoring for poster search.
//!
//! Tiers run best-first and the first hit decides the score. All text
//! comparison is case-insensitive; the fuzzy tier additionally works on
//! normalized (diacritic-folded, symbol-stripped) forms.

use super::normalizer::Normalizer;

/// Cleaned name or original stem equals the query.
pub const SCORE_EXACT: i32 = 1000;
/// Cleaned name starts with the query.
pub const SCORE_PREFIX: i32 = 900;
/// Query occurs as a whole, word-boundary-delimited substring.
pub const SCORE_WHOLE_WORD: i32 = 800;
/// Query occurs anywhere as a substring.
pub const SCORE_SUBSTRING: i32 = 700;
/// Query starts some whitespace-delimited token.
pub const SCORE_TOKEN_START: i32 = 600;
/// Query is a strict prefix of a token longer than itself. Overlaps with
/// the token-start tier for most inputs; kept as a separate lower-priority
/// fallback so tokenization differences cannot change which score a match
/// receives.
pub const SCORE_TOKEN_PREFIX: i32 = 500;
/// Gap-tolerant fuzzy subsequence hit.
pub const SCORE_FUZZY: i32 = 200;

/// Queries shorter than this never reach the fuzzy tier.
pub const FUZZY_MIN_QUERY_LEN: usize = 4;

/// Widest allowed jump between consecutive fuzzy character hits.
const FUZZY_MAX_GAP: usize = 3;

/// Relevance of one poster against a query. Zero means no match; the
/// caller drops the item.
pub fn score(
    query: &str,
    cleaned_name: &str,
    original_stem: &str,
    normalizer: &Normalizer,
) -> i32 {
    let query_lower = query.to_lowercase();
    let cleaned_lower = cleaned_name.to_lowercase();
    let stem_lower = original_stem.to_lowercase();

    let tier = if cleaned_lower == query_lower || stem_lower == query_lower {
        SCORE_EXACT
    } else if cleaned_lower.starts_with(&query_lower) {
        SCORE_PREFIX
    } else if whole_word_match(&query_lower, &cleaned_lower) {
        SCORE_WHOLE_WORD
    } else if cleaned_lower.contains(&query_lower) {
        SCORE_SUBSTRING
    } else if word_boundary_match(&query_lower, &cleaned_lower) {
        SCORE_TOKEN_START
    } else if token_strict_prefix_match(&query_lower, &cleaned_lower) {
        SCORE_TOKEN_PREFIX
    } else if query_lower.chars().count() >= FUZZY_MIN_QUERY_LEN
        && fuzzy_match(
            &normalizer.normalize(&query_lower),
            &normalizer.normalize(&cleaned_lower),
        )
    {
        SCORE_FUZZY
    } else {
        0
    };

    #[cfg(feature = "debug_scorer")]
    log::trace!("score {tier} for query {query:?} against {cleaned_name:?}");

    tier
}

/// True if `pattern` occurs in `text` delimited by word boundaries
/// (string edges or non-alphanumeric characters) on both sides.
fn whole_word_match(pattern: &str, text: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(found) = text[start..].find(pattern) {
        let begin = start + found;
        let end = begin + pattern.len();
        let open = text[..begin]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let close = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
        if open && close {
            return true;
        }
        // Advance past the first character of this occurrence.
        start = begin + text[begin..].chars().next().map_or(1, |c| c.len_utf8());
    }
    false
}

/// True if any whitespace-delimited token of `text` starts with `pattern`.
fn word_boundary_match(pattern: &str, text: &str) -> bool {
    text.split_whitespace().any(|token| token.starts_with(pattern))
}

/// True if `pattern` is a strict prefix of some token longer than itself.
fn token_strict_prefix_match(pattern: &str, text: &str) -> bool {
    text.split_whitespace()
        .any(|token| token.len() > pattern.len() && token.starts_with(pattern))
}

/// Gap-tolerant subsequence match over normalized text.
///
/// Walks the pattern left to right. Each character must be placed within a
/// bounded window after the previous hit: first a plain scan checked
/// against the gap limit, then one bounded secondary scan of
/// `FUZZY_MAX_GAP + 2` positions. The first character that cannot be
/// placed aborts the whole scan; characters are never skipped, reordered
/// or retried. Succeeds when at least `max(3, ceil(0.7 * pattern_len))`
/// characters were placed.
pub fn fuzzy_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    if pattern.len() > text.len() {
        return false;
    }

    // ceil(0.7 * len) in integer arithmetic.
    let required = std::cmp::max(3, (pattern.len() * 7 + 9) / 10);
    let mut matched = 0usize;
    let mut last_pos: isize = -2;

    for &c in &pattern {
        let from = (last_pos + 1).max(0) as usize;
        let found = text[from..].iter().position(|&t| t == c).map(|i| from + i);

        match found {
            Some(pos) if pos as isize - last_pos <= FUZZY_MAX_GAP as isize => {
                matched += 1;
                last_pos = pos as isize;
            }
            _ => {
                let window_end = (from + FUZZY_MAX_GAP + 2).min(text.len());
                let nearby = text[from..window_end]
                    .iter()
                    .position(|&t| t == c)
                    .map(|i| from + i);
                match nearby {
                    Some(pos) => {
                        matched += 1;
                        last_pos = pos as isize;
                    }
                    // One unplaceable character disqualifies the rest.
                    None => break,
                }
            }
        }
    }

    matched >= required
}

#[cfg(test)]
#[path = "tests/scorer_tests.rs"]
mod tests;
