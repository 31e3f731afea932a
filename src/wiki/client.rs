// HTTP client for the MediaWiki Action API.
//
// Fetches the plain-text extract of an article via `action=query` with
// `prop=extracts&explaintext`. Redirects are resolved server-side, so a
// topic like "BTS (band)" and its redirect titles land on the same page.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::traits::ArticleSource;
use super::Article;

/// Client for the MediaWiki Action API.
pub struct MediaWikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl MediaWikiClient {
    /// Create a new client pointing at the given Action API endpoint.
    ///
    /// `timeout` bounds each fetch; article extracts can be large but a
    /// hung connection should not hang the run.
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("wikidiff/0.1 (article comparison)")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make an `action=query` GET request and deserialize the response.
    async fn query(&self, params: &[(&str, &str)]) -> Result<QueryResponse> {
        debug!(api_url = %self.api_url, "Action API query");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .query(params)
            .send()
            .await
            .context("MediaWiki API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("MediaWiki API returned {}: {}", status, body);
        }

        response
            .json::<QueryResponse>()
            .await
            .context("Failed to parse MediaWiki API response")
    }
}

#[async_trait]
impl ArticleSource for MediaWikiClient {
    async fn fetch_article(&self, topic: &str) -> Result<Article> {
        let response = self
            .query(&[
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", topic),
            ])
            .await
            .with_context(|| format!("Failed to fetch article for topic {topic:?}"))?;

        if let Some(err) = response.error {
            anyhow::bail!(
                "MediaWiki API rejected topic {topic:?}: {} ({})",
                err.info,
                err.code
            );
        }

        let page = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("No page in API response for topic {topic:?}"))?;

        if page.missing {
            anyhow::bail!("Topic {topic:?} does not resolve to an article");
        }

        let text = page
            .extract
            .ok_or_else(|| anyhow::anyhow!("No extract returned for topic {topic:?}"))?;

        info!(
            topic = topic,
            title = %page.title,
            chars = text.chars().count(),
            "Fetched article"
        );

        Ok(Article {
            title: page.title,
            text,
        })
    }
}

// -- Serde types for the Action API response (formatversion=2) --

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
}

/// Error envelope the API returns for malformed requests
/// (e.g. an empty or syntactically invalid title).
#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}
