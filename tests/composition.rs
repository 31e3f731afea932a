// Composition tests: the full pipeline over an in-memory article source.
//
// These exercise the data flow fetch -> tokenize -> count -> diff -> score
// without any network access. The fixture source stands in for the
// MediaWiki client behind the same ArticleSource trait.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use wikidiff::pipeline;
use wikidiff::text::rank::rank;
use wikidiff::text::stopwords::StopwordSet;
use wikidiff::wiki::traits::ArticleSource;
use wikidiff::wiki::Article;

struct FixtureSource {
    pages: HashMap<String, String>,
}

impl FixtureSource {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(title, text)| (title.to_string(), text.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl ArticleSource for FixtureSource {
    async fn fetch_article(&self, topic: &str) -> Result<Article> {
        match self.pages.get(topic) {
            Some(text) => Ok(Article {
                title: topic.to_string(),
                text: text.clone(),
            }),
            None => anyhow::bail!("Topic {topic:?} does not resolve to an article"),
        }
    }
}

/// "alpha"×12, "beta"×11, "the"×20, all above the threshold.
fn text_a() -> String {
    format!(
        "{}{}{}",
        "alpha ".repeat(12),
        "beta ".repeat(11),
        "the ".repeat(20)
    )
}

/// "beta"×15, "gamma"×12, plus "rare"×3 which must be filtered out.
fn text_b() -> String {
    format!(
        "{}{}{}",
        "beta ".repeat(15),
        "gamma ".repeat(12),
        "rare ".repeat(3)
    )
}

// ============================================================
// Chain: fetch -> count -> diff -> score
// ============================================================

#[tokio::test]
async fn compare_builds_tables_difference_and_scores() {
    let source = FixtureSource::new(&[("Alpha", text_a()), ("Beta", text_b())]);

    let report = pipeline::run(&source, "Alpha", "Beta").await.unwrap();

    // Frequency tables hold exact counts, threshold applied
    assert_eq!(report.profile_a.table.get("alpha"), Some(12));
    assert_eq!(report.profile_a.table.get("beta"), Some(11));
    assert_eq!(report.profile_a.table.get("the"), Some(20));
    assert_eq!(report.profile_a.table.total_words(), 43);
    assert_eq!(report.profile_a.table.distinct_words(), 3);

    assert_eq!(report.profile_b.table.get("beta"), Some(15));
    assert_eq!(report.profile_b.table.get("gamma"), Some(12));
    assert_eq!(report.profile_b.table.get("rare"), None);

    // One-directional difference: words of A absent from B
    let only_in_a: Vec<&str> = report.only_in_a.iter().map(String::as_str).collect();
    assert_eq!(only_in_a, vec!["alpha", "the"]);

    // Scores are bounded; the shared "beta" mass keeps them above zero
    assert!(report.similarity.ratio <= 100);
    assert!(report.similarity.token_set_ratio > 0);
}

#[tokio::test]
async fn comparing_an_article_with_itself_scores_100() {
    let source = FixtureSource::new(&[("Alpha", text_a()), ("Alpha2", text_a())]);

    let report = pipeline::run(&source, "Alpha", "Alpha2").await.unwrap();

    assert!(report.only_in_a.is_empty());
    assert_eq!(report.similarity.ratio, 100);
    assert_eq!(report.similarity.token_sort_ratio, 100);
    assert_eq!(report.similarity.token_set_ratio, 100);
}

#[tokio::test]
async fn ranked_view_of_a_profile_excludes_stopwords() {
    let source = FixtureSource::new(&[("Alpha", text_a())]);
    let profile = pipeline::profile(&source, "Alpha").await.unwrap();

    let stopwords = StopwordSet::from_words(["the"]);
    let ranked = rank(&profile.table, &stopwords, true);

    assert_eq!(
        ranked,
        vec![(12, "alpha".to_string()), (11, "beta".to_string())]
    );
}

// ============================================================
// Failure propagation
// ============================================================

#[tokio::test]
async fn unknown_topic_fails_naming_the_topic() {
    let source = FixtureSource::new(&[("Alpha", text_a())]);

    let err = pipeline::run(&source, "Alpha", "Nonexistent")
        .await
        .unwrap_err();

    assert!(
        err.to_string().contains("Nonexistent"),
        "Error should name the failing topic: {err}"
    );
}

#[tokio::test]
async fn either_fetch_failing_aborts_the_comparison() {
    let source = FixtureSource::new(&[("Beta", text_b())]);

    assert!(pipeline::run(&source, "Missing", "Beta").await.is_err());
    assert!(pipeline::run(&source, "Beta", "Missing").await.is_err());
}
