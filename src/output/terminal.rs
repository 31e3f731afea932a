// Colored terminal output for frequency tables and comparison reports.
//
// This module handles all user-facing formatting. Ranked lists are derived
// here, on demand, from the immutable frequency tables; ranking is a
// display concern, not pipeline state.

use colored::Colorize;

use crate::pipeline::{ArticleProfile, ComparisonReport};
use crate::similarity::SimilarityScores;
use crate::text::rank::rank;
use crate::text::stopwords::StopwordSet;

/// Display the full compare-command report in pipeline order: both tables,
/// word totals, ranked lists, top words, the one-directional difference,
/// then the similarity scores.
pub fn display_comparison(report: &ComparisonReport, stopwords: &StopwordSet, top: usize) {
    let a = &report.profile_a;
    let b = &report.profile_b;

    display_frequency_table(a, stopwords);
    display_frequency_table(b, stopwords);

    display_word_totals(a);
    display_word_totals(b);

    display_ranked_list(a, stopwords);
    display_ranked_list(b, stopwords);

    display_top_words(a, stopwords, top);
    display_top_words(b, stopwords, top);

    display_difference(report);
    display_similarity(&a.article.title, &b.article.title, &report.similarity);
}

/// Display a single-article frequency report (the freq command).
pub fn display_profile(profile: &ArticleProfile, stopwords: &StopwordSet, top: usize) {
    display_frequency_table(profile, stopwords);
    display_word_totals(profile);
    display_top_words(profile, stopwords, top);
}

/// Print every entry of a frequency table, most frequent first,
/// stopwords included.
fn display_frequency_table(profile: &ArticleProfile, stopwords: &StopwordSet) {
    let title = &profile.article.title;

    if profile.table.is_empty() {
        println!(
            "\n{}",
            format!("=== Frequency table for {title} ===").bold()
        );
        println!("  No word occurs often enough to be counted.");
        return;
    }

    let entries = rank(&profile.table, stopwords, false);

    println!(
        "\n{}",
        format!("=== Frequency table for {title} ({} words) ===", entries.len()).bold()
    );
    println!("  {:<28} {:>6}", "Word".dimmed(), "Count".dimmed());
    println!("  {}", "-".repeat(36).dimmed());
    for (count, word) in &entries {
        println!("  {word:<28} {count:>6}");
    }
}

fn display_word_totals(profile: &ArticleProfile) {
    let title = &profile.article.title;
    println!(
        "\nTotal number of words in {}'s page: {}",
        title.bold(),
        profile.table.total_words()
    );
    println!(
        "Number of different words in {}'s page: {}",
        title.bold(),
        profile.table.distinct_words()
    );
}

/// Print the full ranked list with stopwords excluded.
fn display_ranked_list(profile: &ArticleProfile, stopwords: &StopwordSet) {
    let entries = rank(&profile.table, stopwords, true);
    let title = &profile.article.title;

    println!(
        "\n{}",
        format!(
            "=== Ranked words for {title} ({} after stopword filtering) ===",
            entries.len()
        )
        .bold()
    );
    for (count, word) in &entries {
        println!("  ({count}, {word})");
    }
}

/// Print the `top` most common non-stopword entries as "word, count" lines.
/// A `top` beyond the list length just prints the whole list.
fn display_top_words(profile: &ArticleProfile, stopwords: &StopwordSet, top: usize) {
    let entries = rank(&profile.table, stopwords, true);
    let title = &profile.article.title;

    println!(
        "\n{}",
        format!("The most common words in {title}'s page are:").bold()
    );
    if entries.is_empty() {
        println!("  {}", "(none above the frequency threshold)".dimmed());
        return;
    }
    for (count, word) in entries.iter().take(top) {
        println!("  {word}, {count}");
    }
}

fn display_difference(report: &ComparisonReport) {
    let title_a = &report.profile_a.article.title;
    let title_b = &report.profile_b.article.title;

    println!(
        "\n{}",
        format!("The words in {title_a}'s page but not in {title_b}'s page are:").bold()
    );
    if report.only_in_a.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }
    for word in &report.only_in_a {
        println!("  {word}");
    }
}

fn display_similarity(title_a: &str, title_b: &str, scores: &SimilarityScores) {
    println!(
        "\n{}",
        format!("=== Similarity between {title_a}'s and {title_b}'s content ===").bold()
    );
    println!(
        "  Levenshtein distance similarity ratio: {}%",
        score_str(scores.ratio)
    );
    println!(
        "  Token sort ratio:                      {}%",
        score_str(scores.token_sort_ratio)
    );
    println!(
        "  Token set ratio:                       {}%",
        score_str(scores.token_set_ratio)
    );
}

/// Colorize a 0–100 score: strong matches green, weak ones dimmed.
fn score_str(score: u8) -> colored::ColoredString {
    let s = score.to_string();
    match score {
        70..=100 => s.green().bold(),
        40..=69 => s.yellow(),
        _ => s.dimmed(),
    }
}
