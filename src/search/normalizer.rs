//! Unicode text normalization for poster names.

use super::translit::{DeunicodeTransliterator, Transliterator};

/// Folds diacritics and strips symbol characters ahead of matching.
///
/// The transliteration backend is injected once at construction; callers
/// see the same conceptual output whichever backend is active.
pub struct Normalizer {
    translit: Box<dyn Transliterator>,
}

impl Normalizer {
    pub fn new(translit: Box<dyn Transliterator>) -> Self {
        Self { translit }
    }

    /// Name of the transliteration backend this normalizer was built with.
    pub fn backend(&self) -> &'static str {
        self.translit.name()
    }

    /// Fold accents to ASCII, then drop every character that is not a
    /// letter, digit or whitespace. Case is left untouched; callers fold
    /// case themselves where they need it.
    pub fn normalize(&self, text: &str) -> String {
        let folded = self.translit.transliterate(text);
        folded
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Box::new(DeunicodeTransliterator))
    }
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
