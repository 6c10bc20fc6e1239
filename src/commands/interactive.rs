//! Interactive session mode
//!
//! Text-based REPL owning one session's history and favorites. This is the
//! in-crate stand-in for the product UI: search, inspect, star, share.

use super::inspect::inspect_word;
use super::search::run_search;
use crate::daily::{select_random_word, word_of_the_day_today};
use crate::engine::{Engine, SearchOptions, SortCriteria};
use crate::output::display::{print_search_outcome, print_share_text, print_word_report};
use crate::session::{Favorites, HistoryLog};
use crate::share::generate_shareable_content;
use std::io::{self, Write};

/// Run the interactive session loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if the
/// engine has no dictionary.
#[allow(clippy::too_many_lines)] // Command dispatch is one long match by design
pub fn run_interactive(engine: &Engine) -> Result<(), String> {
    let dictionary = engine
        .dictionary()
        .ok_or("No dictionary loaded")?
        .clone();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Anagram Odyssey - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter letters to find every word they can form.");
    println!("Commands:\n");
    println!("  <letters>          search (or: search <letters>)");
    println!("  info <word>        stats, score, and difficulty for a word");
    println!("  fav <word>         star or unstar a word");
    println!("  favorites          list starred words");
    println!("  history            list recent searches");
    println!("  today              word of the day");
    println!("  random             a random dictionary word");
    println!("  share              share the last search");
    println!("  min <n> / max <n>  set minimum length / result cap");
    println!("  sort <name>        alphabetical, length, or score");
    println!("  quit               exit\n");

    if let Some(word) = word_of_the_day_today(&dictionary) {
        println!("📅 Word of the day: {}\n", word.to_uppercase());
    }

    let mut history = HistoryLog::default();
    let mut favorites = Favorites::new();
    let mut options = SearchOptions::default();
    let mut last_search: Option<(String, Vec<String>)> = None;

    loop {
        let line = get_user_input("odyssey")?;
        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "quit" | "q" | "exit" => {
                println!("\n👋 Until next time!\n");
                return Ok(());
            }
            "help" => {
                println!("search <letters>, info <word>, fav <word>, favorites,");
                println!("history, today, random, share, min <n>, max <n>, sort <name>, quit\n");
            }
            "info" => {
                if argument.is_empty() {
                    println!("Usage: info <word>\n");
                } else {
                    print_word_report(&inspect_word(argument, &dictionary));
                }
            }
            "fav" => {
                if argument.is_empty() {
                    println!("Usage: fav <word>\n");
                } else {
                    let word = argument.to_lowercase();
                    if favorites.toggle(&word) {
                        println!("⭐ Starred '{word}'\n");
                    } else {
                        println!("Removed '{word}' from favorites\n");
                    }
                }
            }
            "favorites" => {
                if favorites.is_empty() {
                    println!("No favorites yet. Star one with: fav <word>\n");
                } else {
                    for (word, _) in favorites.get_all() {
                        println!("  ⭐ {word}");
                    }
                    println!();
                }
            }
            "history" => {
                if history.is_empty() {
                    println!("No searches yet.\n");
                } else {
                    for word in history.get_all() {
                        println!("  • {word}");
                    }
                    println!();
                }
            }
            "today" => {
                if let Some(word) = word_of_the_day_today(&dictionary) {
                    println!("📅 Word of the day: {}\n", word.to_uppercase());
                }
            }
            "random" => {
                if let Some(word) = select_random_word(&dictionary) {
                    println!("🎲 Try: {}\n", word.to_uppercase());
                }
            }
            "share" => match (&last_search, word_of_the_day_today(&dictionary)) {
                (Some((input, matches)), Some(daily)) => {
                    let content = generate_shareable_content(input, matches, daily);
                    print_share_text(&content);
                }
                _ => println!("Nothing to share yet; run a search first.\n"),
            },
            "min" => match argument.parse::<usize>() {
                Ok(n) => {
                    options.min_length = n.max(1);
                    println!("Minimum word length: {}\n", options.min_length);
                }
                Err(_) => println!("Usage: min <number>\n"),
            },
            "max" => match argument.parse::<usize>() {
                Ok(n) => {
                    options.max_results = n.max(1);
                    println!("Result cap: {}\n", options.max_results);
                }
                Err(_) => println!("Usage: max <number>\n"),
            },
            "sort" => {
                options.sort = SortCriteria::from_name(argument);
                println!("Sorting by: {}\n", options.sort.name());
            }
            _ => {
                // Anything else is a search; allow an explicit "search" prefix too
                let letters = if command == "search" {
                    argument
                } else {
                    line.as_str()
                };

                let outcome = run_search(engine, letters, &options).map_err(|e| e.to_string())?;

                if outcome.normalized_input.is_empty() {
                    println!("No letters found in that input; try letters a-z.\n");
                    continue;
                }

                history.add(outcome.normalized_input.clone());
                print_search_outcome(&outcome, &favorites);
                last_search = Some((outcome.normalized_input, outcome.matches));
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
