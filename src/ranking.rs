//! Guess ranking by partition scoring.
//!
//! A guess is scored by how it splits the target list: group the targets by
//! the feedback pattern the guess would receive against each, then sum the
//! squared group sizes. With equally likely targets that sum is proportional
//! to the expected number of candidates left after observing the feedback,
//! so lower scores mean more discriminating guesses.

use rayon::prelude::*;

use crate::feedback::FeedbackPattern;
use crate::words::Word;

/// A guess together with its partition score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedGuess {
    pub word: Word,
    pub score: u64,
}

/// Ranks candidate guesses against a fixed list of possible solutions.
#[derive(Debug, Clone)]
pub struct GuessRanker {
    guesses: Vec<Word>,
    targets: Vec<Word>,
}

impl GuessRanker {
    pub fn new(guesses: Vec<Word>, targets: Vec<Word>) -> Self {
        Self { guesses, targets }
    }

    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Sum of squared partition group sizes for a single guess.
    ///
    /// Every target lands in exactly one feedback group, so the group sizes
    /// always add up to the number of targets. An empty target list scores 0.
    pub fn partition_score(&self, guess: Word) -> u64 {
        let mut group_sizes = [0u64; FeedbackPattern::NUM_PATTERNS];

        for &target in &self.targets {
            let pattern = FeedbackPattern::calculate(guess, target);
            group_sizes[pattern.index()] += 1;
        }

        group_sizes.iter().map(|&count| count * count).sum()
    }

    /// Score every guess in parallel.
    ///
    /// The returned table is index-aligned with the guess list. Each score is
    /// an independent task on rayon's worker pool (sized to the machine's
    /// parallelism, minimum one thread) and is written to its own slot;
    /// `collect_into_vec` returns only after every task has finished, so all
    /// scores are visible to the caller.
    pub fn score_all(&self) -> Vec<u64> {
        let mut scores = Vec::with_capacity(self.guesses.len());
        self.guesses
            .par_iter()
            .map(|&guess| self.partition_score(guess))
            .collect_into_vec(&mut scores);
        scores
    }

    /// The `count` lowest-scoring guesses, best first.
    ///
    /// Equal scores are ordered alphabetically so the ranking is
    /// reproducible. Asking for more guesses than exist returns them all,
    /// fully sorted. `scores` must be the table produced by
    /// [`score_all`](Self::score_all).
    pub fn top_k(&self, scores: &[u64], count: usize) -> Vec<RankedGuess> {
        let mut indices: Vec<usize> = (0..self.guesses.len()).collect();
        let count = count.min(indices.len());
        let key = |i: usize| (scores[i], self.guesses[i]);

        // Isolate the best `count` indices before sorting only those.
        if count < indices.len() {
            indices.select_nth_unstable_by_key(count, |&i| key(i));
            indices.truncate(count);
        }
        indices.sort_unstable_by_key(|&i| key(i));

        indices
            .into_iter()
            .map(|i| RankedGuess {
                word: self.guesses[i],
                score: scores[i],
            })
            .collect()
    }

    /// Score all guesses and return the best `limit`, or every guess in
    /// ranked order when no limit is given.
    pub fn rank(&self, limit: Option<usize>) -> Vec<RankedGuess> {
        let scores = self.score_all();
        self.top_k(&scores, limit.unwrap_or(self.guesses.len()))
    }
}
