//! Case and diacritic folding for search comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a string into its canonical comparable form: lowercase, with all
/// Greek and Latin diacritical marks removed.
///
/// The fold happens in three steps: locale-invariant lowercasing, a direct
/// mapping of the precomposed Greek accented vowels to their base letters,
/// and finally NFD decomposition with every combining mark dropped, which
/// catches Latin accents and any Greek form the table misses.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)` for any
/// input, and the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(fold_greek_accent)
        .collect();

    folded.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Maps a precomposed Greek accented vowel to its unaccented base letter.
///
/// Uppercase forms are already handled by the lowercasing step, so only the
/// lowercase precomposed forms appear here.
fn fold_greek_accent(c: char) -> char {
    match c {
        'ά' => 'α',
        'έ' => 'ε',
        'ή' => 'η',
        'ί' | 'ϊ' | 'ΐ' => 'ι',
        'ό' => 'ο',
        'ύ' | 'ϋ' | 'ΰ' => 'υ',
        'ώ' => 'ω',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lowercases_latin_and_greek() {
        assert_eq!(normalize("HELLO"), "hello");
        // Word-final capital sigma lowercases to the final form.
        assert_eq!(normalize("ΠΑΡΟΣ"), "παρος");
    }

    #[test]
    fn test_folds_greek_accents() {
        assert_eq!(normalize("Άγιος Νικόλαος"), "αγιος νικολαος");
        assert_eq!(normalize("καφές"), "καφες");
        assert_eq!(normalize("Μύκονος"), "μυκονος");
    }

    #[test]
    fn test_folds_greek_diaeresis() {
        assert_eq!(normalize("προϊόν"), "προιον");
        assert_eq!(normalize("γοργοϋπήκοος"), "γοργουπηκοος");
    }

    #[test]
    fn test_case_and_accent_insensitive() {
        assert_eq!(normalize("Αθήνα"), normalize("αθηνα"));
        assert_eq!(normalize("Αθήνα"), normalize("ΑΘΗΝΑ"));
    }

    #[test]
    fn test_strips_latin_accents() {
        assert_eq!(normalize("Café Résumé"), "cafe resume");
        assert_eq!(normalize("naïve"), "naive");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Άγιος Νικόλαος", "ΑΘΉΝΑ", "Café", "already plain", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_leaves_digits_and_punctuation() {
        assert_eq!(normalize("Οδός 25ης Μαρτίου, 104"), "οδος 25ης μαρτιου, 104");
    }
}
