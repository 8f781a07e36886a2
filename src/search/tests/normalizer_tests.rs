use super::*;
use crate::search::translit::FoldTableTransliterator;

#[test]
fn test_normalize_folds_diacritics() {
    let normalizer = Normalizer::default();
    let out = normalizer.normalize("Café – François");

    let words: Vec<&str> = out.split_whitespace().collect();
    assert_eq!(words, vec!["Cafe", "Francois"]);
    assert!(out.chars().all(|c| c.is_alphanumeric() || c.is_whitespace()));
}

#[test]
fn test_normalize_strips_symbols() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("Spider-Man: No Way Home!"),
        "SpiderMan No Way Home"
    );
}

#[test]
fn test_normalize_keeps_case() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("ÄRGER im Paradies"), "ARGER im Paradies");
}

#[test]
fn test_normalize_empty() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize(""), "");
}

// Both backends must be interchangeable for the common Western set.
#[test]
fn test_fold_table_backend() {
    let normalizer = Normalizer::new(Box::new(FoldTableTransliterator));
    assert_eq!(normalizer.backend(), "fold-table");
    assert_eq!(normalizer.normalize("Café"), "Cafe");
    assert_eq!(normalizer.normalize("Señor Bläh"), "Senor Blah");
}

#[test]
fn test_default_backend_is_deunicode() {
    assert_eq!(Normalizer::default().backend(), "deunicode");
}
