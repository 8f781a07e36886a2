//! Search, relevance ranking and default ordering for the poster grid.
//!
//! Two mutually exclusive paths serve a request: a non-blank query goes
//! through [`rank::filter_and_rank`] (relevance order only), everything
//! else through [`ordering::sort_posters`] (configured total order).

pub mod normalizer;
pub mod ordering;
pub mod rank;
pub mod scorer;
pub mod tags;
pub mod translit;

pub use normalizer::Normalizer;
pub use ordering::{compare, sort_posters};
pub use rank::filter_and_rank;
pub use tags::{added_timestamp, strip_tags};
pub use translit::{DeunicodeTransliterator, FoldTableTransliterator, Transliterator};

use crate::config::DisplayConfig;
use crate::types::PosterItem;

/// Resolve the final display order for one request.
pub fn display_order(
    items: &[PosterItem],
    query: Option<&str>,
    config: &DisplayConfig,
    normalizer: &Normalizer,
) -> Vec<PosterItem> {
    match query {
        Some(q) if !q.trim().is_empty() => filter_and_rank(items, q, normalizer),
        _ => sort_posters(items, config),
    }
}
