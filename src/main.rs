//! Wordle Rank CLI
//!
//! Ranks every allowed guess against the possible solutions and prints the
//! most discriminating ones, one `word score` line per guess, best first.

use std::path::PathBuf;

use clap::Parser;

use wordle_rank::{load_words, GuessRanker};

#[derive(Parser)]
#[clap(name = "wordle-rank")]
#[clap(about = "rank wordle guesses by how well they split the solution space", long_about = None)]
#[clap(author)]
struct Cli {
    /// File holding the allowed guesses as quoted five-letter words
    #[clap(value_parser, default_value = "words.txt")]
    words: PathBuf,

    /// File holding the possible solutions in the same format
    #[clap(value_parser, default_value = "targets.txt")]
    targets: PathBuf,

    /// Print only the best N guesses instead of the full ranking
    #[clap(short, long, value_parser)]
    top: Option<usize>,
}

fn main() {
    let args = Cli::parse();

    let guesses = load_words(&args.words);
    let targets = load_words(&args.targets);

    let ranker = GuessRanker::new(guesses, targets);
    for entry in ranker.rank(args.top) {
        println!("{} {}", entry.word, entry.score);
    }
}
