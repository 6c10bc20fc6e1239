//! Display functions for command results

use super::formatters::difficulty_bar;
use crate::commands::{BenchmarkResult, SearchOutcome, WordReport};
use crate::session::Favorites;
use crate::share::ShareableContent;
use colored::Colorize;

/// Print a search outcome, grouped by length
///
/// Starred words get a marker so the session's favorites are visible inline.
pub fn print_search_outcome(outcome: &SearchOutcome, favorites: &Favorites) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        outcome.normalized_input.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if outcome.groups.is_empty() {
        println!(
            "\n{}",
            "No words found. Try different letters or reduce the minimum length.".red()
        );
        println!();
        return;
    }

    for group in &outcome.groups {
        println!(
            "\n{} {}",
            format!("{} letters", group.length).bright_cyan().bold(),
            format!("({})", group.words.len()).bright_black()
        );
        for word in &group.words {
            if favorites.contains(word) {
                println!("  ⭐ {}", word.bright_white().bold());
            } else {
                println!("  • {word}");
            }
        }
    }

    let shown: usize = outcome.groups.iter().map(|g| g.words.len()).sum();
    println!();
    if outcome.total_matches > shown {
        println!(
            "Showing {} of {} matches",
            shown.to_string().bright_yellow(),
            outcome.total_matches.to_string().bright_yellow().bold()
        );
    } else {
        println!(
            "{}",
            format!("Found {} matches", outcome.total_matches)
                .green()
                .bold()
        );
    }
    println!();
}

/// Print a full word report
pub fn print_word_report(report: &WordReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD REPORT:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = difficulty_bar(report.difficulty, 30);

    println!("\n   Length:        {}", report.stats.length);
    println!(
        "   Vowels:        {}   Consonants: {}",
        report.stats.vowel_count, report.stats.consonant_count
    );
    println!("   Unique:        {}", report.stats.unique_letter_count);
    println!(
        "   Scrabble:      {}",
        report.scrabble_score.to_string().bright_yellow().bold()
    );
    println!(
        "   Difficulty:    [{}] {}",
        bar.green(),
        format!("{:.1}", report.difficulty).bright_yellow()
    );

    if report.palindrome {
        println!("   {}", "Palindrome!".bright_magenta());
    }
    if report.repeated_letters {
        println!("   {}", "Has repeated letters".bright_black());
    }
    if !report.in_dictionary {
        println!("   {}", "Not in dictionary".red());
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!("   Searches run:     {}", result.searches);
    println!(
        "   Searches/second:  {}",
        format!("{:.1}", result.searches_per_second)
            .bright_yellow()
            .bold()
    );
    println!("   Average matches:  {:.1}", result.average_matches);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}

/// Print shareable content as the plain text a host would copy
pub fn print_share_text(content: &ShareableContent) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", content.to_text());
    println!("{}", "─".repeat(60).cyan());
    println!();
}
