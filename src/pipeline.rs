// The comparison pipeline: fetch, count, diff, score.
//
// Fetching the two articles is embarrassingly parallel, so both requests
// run concurrently; everything downstream needs both results, and a failed
// fetch aborts the run before any output is produced.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::info;

use crate::similarity::{self, SimilarityScores};
use crate::text::frequency::{FrequencyBuilder, FrequencyTable};
use crate::text::tokenize;
use crate::wiki::traits::ArticleSource;
use crate::wiki::Article;

/// One article with its frequency table.
pub struct ArticleProfile {
    pub article: Article,
    pub table: FrequencyTable,
}

/// Everything the compare command reports.
pub struct ComparisonReport {
    pub profile_a: ArticleProfile,
    pub profile_b: ArticleProfile,
    /// Words in A's table that are absent from B's (one-directional)
    pub only_in_a: BTreeSet<String>,
    pub similarity: SimilarityScores,
}

/// Fetch one article and build its frequency table.
pub async fn profile(source: &dyn ArticleSource, topic: &str) -> Result<ArticleProfile> {
    let article = source.fetch_article(topic).await?;
    let table = FrequencyBuilder::default().build(tokenize::tokens(&article.text));

    info!(
        topic = topic,
        total = table.total_words(),
        distinct = table.distinct_words(),
        "Built frequency table"
    );

    Ok(ArticleProfile { article, table })
}

/// Run the full two-article comparison.
pub async fn run(
    source: &dyn ArticleSource,
    topic_a: &str,
    topic_b: &str,
) -> Result<ComparisonReport> {
    let (profile_a, profile_b) =
        tokio::try_join!(profile(source, topic_a), profile(source, topic_b))?;

    let only_in_a = profile_a.table.subtract(&profile_b.table);
    let similarity = similarity::compare(&profile_a.article.text, &profile_b.article.text);

    Ok(ComparisonReport {
        profile_a,
        profile_b,
        only_in_a,
        similarity,
    })
}
