//! Anagram Odyssey - CLI
//!
//! Anagram finder with interactive and one-shot modes: letter-multiset search
//! over a dictionary, word scoring, and a deterministic daily word.

use anagram_odyssey::{
    commands::{inspect_word, run_benchmark, run_interactive, run_search},
    daily::{select_random_word, word_of_the_day_today},
    dictionary::{Dictionary, loader},
    engine::{Engine, SearchOptions, SortCriteria},
    output::{print_benchmark_result, print_search_outcome, print_word_report},
    session::Favorites,
    share::generate_shareable_content,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "anagram_odyssey",
    about = "Find every dictionary word formable from your letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a plain-text word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default - search, star, and share words)
    Interactive,

    /// One-shot anagram search
    Search {
        /// The letters to search with
        letters: String,

        /// Minimum word length
        #[arg(short = 'l', long, default_value = "4")]
        min_length: usize,

        /// Maximum number of results shown
        #[arg(short = 'm', long, default_value = "10")]
        max_results: usize,

        /// Sort criterion: alphabetical (default), length, score
        #[arg(short, long, default_value = "alphabetical")]
        sort: String,

        /// Emit shareable content as JSON instead of grouped text
        #[arg(long)]
        json: bool,
    },

    /// Analyze a single word (stats, score, difficulty)
    Inspect {
        /// Word to analyze
        word: String,
    },

    /// Print the word of the day
    Today,

    /// Print a random dictionary word
    Random,

    /// Benchmark search throughput
    Benchmark {
        /// Number of searches to run
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a plain-text word file
fn load_dictionary(wordlist_mode: &str) -> Result<Arc<Dictionary>> {
    let dictionary = match wordlist_mode {
        "embedded" => loader::load_embedded(),
        path => loader::load_from_file(path)?,
    };
    Ok(Arc::new(dictionary))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let engine = Engine::with_dictionary(Arc::clone(&dictionary));

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&engine).map_err(|e| anyhow::anyhow!(e)),
        Commands::Search {
            letters,
            min_length,
            max_results,
            sort,
            json,
        } => run_search_command(&engine, &dictionary, &letters, min_length, max_results, &sort, json),
        Commands::Inspect { word } => {
            print_word_report(&inspect_word(&word, &dictionary));
            Ok(())
        }
        Commands::Today => {
            match word_of_the_day_today(&dictionary) {
                Some(word) => println!("{word}"),
                None => anyhow::bail!("Dictionary is empty"),
            }
            Ok(())
        }
        Commands::Random => {
            match select_random_word(&dictionary) {
                Some(word) => println!("{word}"),
                None => anyhow::bail!("Dictionary is empty"),
            }
            Ok(())
        }
        Commands::Benchmark { count } => {
            let result = run_benchmark(&engine, count)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_search_command(
    engine: &Engine,
    dictionary: &Arc<Dictionary>,
    letters: &str,
    min_length: usize,
    max_results: usize,
    sort: &str,
    json: bool,
) -> Result<()> {
    let options = SearchOptions {
        min_length,
        max_results,
        sort: SortCriteria::from_name(sort),
    };

    let outcome = run_search(engine, letters, &options)?;

    if json {
        let daily = word_of_the_day_today(dictionary).unwrap_or_default();
        let content =
            generate_shareable_content(&outcome.normalized_input, &outcome.matches, daily);
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        // One-shot searches have no session, so no starred words to mark
        print_search_outcome(&outcome, &Favorites::new());
    }

    Ok(())
}
