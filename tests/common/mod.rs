use std::sync::Once;

use posterwall::types::PosterItem;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Representative poster corpus: library tags, identifier tags, ingestion
/// timestamps, status tokens, diacritics and an orphan.
pub fn fixture_posters() -> Vec<PosterItem> {
    vec![
        PosterItem::new(
            "The Matrix [[4K Movies]] [tmdb603] (A1700000400)--Plex--.jpg",
            "movies",
        ),
        PosterItem::new(
            "Matrix Reloaded [[4K Movies]] (A1700000300)--Plex--.jpg",
            "movies",
        ),
        PosterItem::new("Amélie [[Foreign]] (A1700000200)--Plex--.jpg", "movies"),
        PosterItem::new(
            "Stranger Things Season 2 [[TV]] (A1700000100)--Plex--.jpg",
            "tv",
        ),
        PosterItem::new(
            "Stranger Things Season 10 [[TV]] (A1700000500)--Plex--.jpg",
            "tv",
        ),
        PosterItem::new("Old Poster--Orphaned--.jpg", "collections"),
        PosterItem::new(
            "Blade Runner 2049 [[Movies]]--Plex-- (A1700000250).jpg",
            "movies",
        ),
    ]
}

/// Filenames of a result list, for compact assertions.
pub fn names(items: &[PosterItem]) -> Vec<&str> {
    items.iter().map(|item| item.filename.as_str()).collect()
}
