// Word-frequency tables.
//
// Counting is two-pass: every token is counted to its final total first,
// and only then is the minimum-count filter applied. A word that crosses
// the threshold near the end of the text keeps its true total count.

use std::collections::{BTreeSet, HashMap};

/// Builds frequency tables from a normalized token stream.
pub struct FrequencyBuilder {
    /// Words must occur strictly more than this many times to be kept.
    pub min_count: u64,
}

impl Default for FrequencyBuilder {
    fn default() -> Self {
        Self { min_count: 10 }
    }
}

impl FrequencyBuilder {
    /// Count the tokens, then keep only the words whose final count
    /// exceeds `min_count`.
    pub fn build<I>(&self, tokens: I) -> FrequencyTable
    where
        I: IntoIterator<Item = String>,
    {
        let mut working: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            *working.entry(token).or_insert(0) += 1;
        }

        working.retain(|_, count| *count > self.min_count);

        FrequencyTable { counts: working }
    }
}

/// A word → occurrence-count mapping, filtered to words above the builder's
/// threshold. Built once per article and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Sum of all counts in the table.
    pub fn total_words(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct words in the table.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// The count for a word, if present.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (word, count) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Words present in this table but absent from `other`.
    ///
    /// One-directional: `a.subtract(b)` and `b.subtract(a)` are different
    /// sets. The result is presence-only, so it is a set rather than a map;
    /// a BTreeSet keeps iteration order deterministic for display.
    pub fn subtract(&self, other: &FrequencyTable) -> BTreeSet<String> {
        self.counts
            .keys()
            .filter(|word| !other.counts.contains_key(*word))
            .cloned()
            .collect()
    }
}
