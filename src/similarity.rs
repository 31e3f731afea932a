// Approximate string-matching between two article texts.
//
// The edit-distance core is strsim's normalized Levenshtein similarity,
// scaled to an integer percentage. The two token ratios reuse the
// tokenizer's normalization (whitespace split, punctuation strip,
// lowercase) so "matching" means the same thing everywhere in the tool.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

use crate::text::tokenize;

/// The three similarity scores for a pair of texts, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityScores {
    /// Full-text edit-distance similarity, case-insensitive
    pub ratio: u8,
    /// Edit-distance similarity of the sorted, normalized token strings
    pub token_sort_ratio: u8,
    /// Set-based comparison, robust to texts of very different lengths
    pub token_set_ratio: u8,
}

/// Compute all three scores for a pair of texts.
pub fn compare(a: &str, b: &str) -> SimilarityScores {
    SimilarityScores {
        ratio: ratio(a, b),
        token_sort_ratio: token_sort_ratio(a, b),
        token_set_ratio: token_set_ratio(a, b),
    }
}

/// Edit-distance similarity of the two full texts after lowercasing.
/// Punctuation and whitespace participate in the distance.
pub fn ratio(a: &str, b: &str) -> u8 {
    to_score(normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()))
}

/// Normalize both texts to sorted token strings, then compare.
/// Insensitive to word order.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    to_score(normalized_levenshtein(
        &sorted_token_string(a),
        &sorted_token_string(b),
    ))
}

/// Compare de-duplicated token sets.
///
/// The sorted intersection string is compared against each side's
/// intersection-plus-remainder string, and the two remainder strings
/// against each other; the best of the three wins. When one text is a
/// token-subset of the other this scores 100 regardless of the extra
/// material.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let set_a: BTreeSet<String> = tokenize::tokens(a).collect();
    let set_b: BTreeSet<String> = tokenize::tokens(b).collect();

    // With exactly one empty side the intersection comparisons degenerate
    // to empty-vs-empty; score the pair 0 instead of a spurious 100.
    if set_a.is_empty() != set_b.is_empty() {
        return 0;
    }

    let common = join(set_a.intersection(&set_b));
    let only_a = join(set_a.difference(&set_b));
    let only_b = join(set_b.difference(&set_a));

    let combined_a = join_nonempty(&common, &only_a);
    let combined_b = join_nonempty(&common, &only_b);

    let best = normalized_levenshtein(&common, &combined_a)
        .max(normalized_levenshtein(&common, &combined_b))
        .max(normalized_levenshtein(&combined_a, &combined_b));

    to_score(best)
}

/// Normalized tokens, alphabetically sorted, rejoined with single spaces.
fn sorted_token_string(text: &str) -> String {
    let mut words: Vec<String> = tokenize::tokens(text).collect();
    words.sort();
    words.join(" ")
}

fn join<'a, I: Iterator<Item = &'a String>>(words: I) -> String {
    words.map(String::as_str).collect::<Vec<_>>().join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}
