//! Search filtering and relevance ranking over a poster collection.

use rayon::prelude::*;

use super::normalizer::Normalizer;
use super::scorer;
use super::tags;
use crate::types::PosterItem;
use crate::PLEX_TAG;

/// Query that surfaces posters missing the server status token.
const ORPHAN_QUERY: &str = "orphaned";

/// Transient scoring pair; never leaves this module.
struct ScoredItem {
    item: PosterItem,
    score: i32,
}

/// Filter a collection against a free-text query and rank the hits by
/// relevance, best first. Equal scores keep their input order.
///
/// Two cases short-circuit the scorer: a blank query returns the input
/// unchanged, and the literal query `"orphaned"` returns every item
/// without the `--Plex--` token, in input order.
pub fn filter_and_rank(
    items: &[PosterItem],
    query: &str,
    normalizer: &Normalizer,
) -> Vec<PosterItem> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return items.to_vec();
    }

    if trimmed.to_lowercase() == ORPHAN_QUERY {
        let plex_lower = PLEX_TAG.to_lowercase();
        let orphans: Vec<PosterItem> = items
            .iter()
            .filter(|item| !item.filename.to_lowercase().contains(&plex_lower))
            .cloned()
            .collect();
        log::debug!(
            "Orphan query matched {} of {} posters",
            orphans.len(),
            items.len()
        );
        return orphans;
    }

    let mut scored: Vec<ScoredItem> = items
        .par_iter()
        .filter_map(|item| {
            let stem = item.stem();
            let cleaned = tags::strip_tags(stem);
            let score = scorer::score(trimmed, &cleaned, stem, normalizer);
            (score > 0).then(|| ScoredItem {
                item: item.clone(),
                score,
            })
        })
        .collect();

    // Stable sort: ties keep collection order.
    scored.sort_by_key(|s| std::cmp::Reverse(s.score));

    log::debug!(
        "Query {:?} matched {} of {} posters",
        trimmed,
        scored.len(),
        items.len()
    );

    scored.into_iter().map(|s| s.item).collect()
}

#[cfg(test)]
#[path = "tests/rank_tests.rs"]
mod tests;
