use super::*;

/// Minimum fold coverage both backends must agree on.
const MINIMUM_TABLE: &[(&str, &str)] = &[
    ("àáâãäå", "aaaaaa"),
    ("ÀÁÂÃÄÅ", "AAAAAA"),
    ("æ", "ae"),
    ("Æ", "AE"),
    ("ç", "c"),
    ("Ç", "C"),
    ("èéêë", "eeee"),
    ("ÈÉÊË", "EEEE"),
    ("ìíîï", "iiii"),
    ("ÌÍÎÏ", "IIII"),
    ("ñ", "n"),
    ("Ñ", "N"),
    ("òóôõöø", "oooooo"),
    ("ÒÓÔÕÖØ", "OOOOOO"),
    ("ùúûü", "uuuu"),
    ("ÙÚÛÜ", "UUUU"),
    ("ýÿ", "yy"),
    ("Ý", "Y"),
    ("ß", "ss"),
    ("œ", "oe"),
    ("Œ", "OE"),
];

#[test]
fn test_fold_table_minimum_mappings() {
    let table = FoldTableTransliterator;
    for (input, expected) in MINIMUM_TABLE {
        assert_eq!(&table.transliterate(input), expected, "folding {input:?}");
    }
}

#[test]
fn test_backends_agree_on_minimum_table() {
    let native = DeunicodeTransliterator;
    let table = FoldTableTransliterator;
    for (input, expected) in MINIMUM_TABLE {
        assert_eq!(&native.transliterate(input), expected, "deunicode {input:?}");
        assert_eq!(&table.transliterate(input), expected, "fold table {input:?}");
    }
}

#[test]
fn test_fold_table_latin_extended_a() {
    assert_eq!(FoldTableTransliterator.transliterate("Łódź"), "Lodz");
    assert_eq!(FoldTableTransliterator.transliterate("Šärök"), "Sarok");
}

#[test]
fn test_fold_table_passes_unknown_through() {
    let table = FoldTableTransliterator;
    assert_eq!(table.transliterate("Movie 42"), "Movie 42");
    // Outside the table: left as-is, the normalizer filter handles it.
    assert_eq!(table.transliterate("日本語"), "日本語");
}
