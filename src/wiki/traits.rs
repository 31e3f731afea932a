// Article source trait: the swap-ready abstraction over the remote fetch.
//
// The pipeline only ever sees this trait. The default implementation is the
// MediaWiki Action API client; tests substitute a fixture source so the
// whole pipeline runs without network.

use anyhow::Result;
use async_trait::async_trait;

use super::Article;

/// Trait for resolving a topic title to its full article text.
/// Implementations are async because real sources sit behind HTTP.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the article for the given topic title.
    ///
    /// A title that does not resolve to an article is an error naming the
    /// title; implementations must never substitute empty text.
    async fn fetch_article(&self, topic: &str) -> Result<Article>;
}
