use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use wikidiff::config::Config;
use wikidiff::output::terminal;
use wikidiff::pipeline;
use wikidiff::text::stopwords::StopwordSet;
use wikidiff::wiki::client::MediaWikiClient;

/// Wikidiff: word-frequency and similarity comparison for Wikipedia
/// articles.
///
/// Fetches article content from the MediaWiki Action API, counts the words
/// that appear more than ten times, and compares two articles with
/// fuzzy-matching ratios.
#[derive(Parser)]
#[command(name = "wikidiff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two articles: frequency tables, word difference, similarity
    Compare {
        /// Title of the first article
        topic1: String,

        /// Title of the second article
        topic2: String,

        /// How many of the most common words to print per article
        #[arg(long, default_value = "30")]
        top: usize,
    },

    /// Report word frequencies for a single article
    Freq {
        /// Title of the article
        topic: String,

        /// How many of the most common words to print
        #[arg(long, default_value = "30")]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wikidiff=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // The stopword list is read exactly once per run, here, and shared
    // read-only with every ranking call below.
    let stopwords = StopwordSet::load(&config.stopwords_path)?;
    info!(count = stopwords.len(), "Stopword list ready");

    let client = MediaWikiClient::new(&config.api_url, config.fetch_timeout)?;

    match cli.command {
        Commands::Compare {
            topic1,
            topic2,
            top,
        } => {
            println!("Fetching \"{topic1}\" and \"{topic2}\"...");
            let report = pipeline::run(&client, &topic1, &topic2).await?;
            terminal::display_comparison(&report, &stopwords, top);
        }

        Commands::Freq { topic, top } => {
            println!("Fetching \"{topic}\"...");
            let profile = pipeline::profile(&client, &topic).await?;
            terminal::display_profile(&profile, &stopwords, top);
        }
    }

    Ok(())
}
