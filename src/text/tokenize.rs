// Tokenization and normalization.
//
// A token is a maximal whitespace-delimited substring, stripped of leading
// and trailing Unicode punctuation (general category P*) and lowercased.
// Inner punctuation survives: "don't" stays one word, while "dog." and
// "(dog" both normalize to "dog".

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Lazily yield normalized tokens from raw article text.
///
/// Tokens that normalize to the empty string (an all-punctuation token like
/// "--" or "...") are dropped rather than counted as words.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|raw| {
        let stripped = normalize(raw);
        if stripped.is_empty() {
            None
        } else {
            Some(stripped)
        }
    })
}

/// Normalize a single raw token: strip punctuation from both ends, then
/// lowercase. Returns the empty string for an all-punctuation token.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(is_punctuation).to_lowercase()
}

/// Whether a character belongs to the Unicode punctuation group (Pc, Pd,
/// Pe, Pf, Pi, Po, Ps). The crate's compiled category tables make this a
/// constant-time lookup.
fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}
