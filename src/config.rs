use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default MediaWiki Action API endpoint (English Wikipedia).
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Default path to the stopword list, relative to the working directory.
pub const DEFAULT_STOPWORDS_PATH: &str = "stopwords.txt";

/// Default network timeout for a single article fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Central configuration loaded from environment variables.
///
/// Everything has a sensible default, so the tool runs with no setup against
/// English Wikipedia. The .env file is loaded automatically at startup via
/// dotenvy.
pub struct Config {
    /// MediaWiki Action API endpoint (WIKIDIFF_API_URL)
    pub api_url: String,
    /// Path to the whitespace-separated stopword file (WIKIDIFF_STOPWORDS)
    pub stopwords_path: PathBuf,
    /// Per-request network timeout (WIKIDIFF_FETCH_TIMEOUT, seconds)
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables, applying defaults
    /// for anything unset.
    pub fn load() -> Result<Self> {
        let fetch_timeout_secs = match env::var("WIKIDIFF_FETCH_TIMEOUT") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("WIKIDIFF_FETCH_TIMEOUT is not a number: {raw:?}"))?,
            Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: env::var("WIKIDIFF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            stopwords_path: env::var("WIKIDIFF_STOPWORDS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STOPWORDS_PATH)),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        })
    }
}
