//! # Wordle Rank
//!
//! A multithreaded Wordle guess ranker.
//!
//! Every allowed guess is scored by how finely it partitions the possible
//! solutions into feedback classes; guesses with the smallest sum-of-squares
//! partition score leave the fewest candidates standing on average, so they
//! are reported first.

pub mod feedback;
pub mod ranking;
pub mod words;

pub use feedback::{Feedback, FeedbackPattern};
pub use ranking::{GuessRanker, RankedGuess};
pub use words::{load_words, parse_words, Word};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
