// Stopword list loading.
//
// The list is a static UTF-8 file of whitespace-separated words, read once
// per process in main and passed by reference to ranking. A missing file is
// fatal; there is no built-in fallback list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// An immutable set of words excluded from "most common" reporting.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load the stopword file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;

        let words: HashSet<String> = raw.split_whitespace().map(str::to_string).collect();
        debug!(count = words.len(), path = %path.display(), "Loaded stopwords");

        Ok(Self { words })
    }

    /// Build a set from an in-memory word list. Used by tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
