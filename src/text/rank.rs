// Frequency ranking.

use super::frequency::FrequencyTable;
use super::stopwords::StopwordSet;

/// Rank a frequency table into (count, word) pairs, sorted by descending
/// count with ties broken by descending word. Reverse-sorting the tuples
/// gives exactly that composite order.
///
/// With `exclude_stopwords` set, stopword entries are skipped; the relative
/// order of the remaining entries is unchanged. The full list is returned;
/// truncation is a display concern.
pub fn rank(
    table: &FrequencyTable,
    stopwords: &StopwordSet,
    exclude_stopwords: bool,
) -> Vec<(u64, String)> {
    let mut entries: Vec<(u64, String)> = table
        .iter()
        .filter(|(word, _)| !(exclude_stopwords && stopwords.contains(word)))
        .map(|(word, count)| (count, word.to_string()))
        .collect();

    entries.sort_by(|a, b| b.cmp(a));
    entries
}
