//! Round history tracking.
//!
//! Every checked or skipped word leaves a record behind. `record` returns a
//! new history and leaves the old one untouched; `push` appends in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a round ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The guess matched the target word
    Solved,
    /// The guess did not match; the word stays active
    Missed,
    /// The player skipped the word
    Skipped,
}

/// Record of a single move against one word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based position of the word in the session
    pub word_number: usize,
    /// The target word
    pub word: String,
    /// What happened
    pub outcome: RoundOutcome,
    /// Score after the move
    pub score: u32,
    /// When the move happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the moves in a session.
///
/// # Example
///
/// ```rust
/// use unscramble::core::{RoundHistory, RoundOutcome, RoundRecord};
/// use chrono::Utc;
///
/// let history = RoundHistory::new();
/// let history = history.record(RoundRecord {
///     word_number: 1,
///     word: "animal".to_string(),
///     outcome: RoundOutcome::Solved,
///     score: 20,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.solved(), vec!["animal"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoundHistory {
    rounds: Vec<RoundRecord>,
}

impl RoundHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Record a move, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, round: RoundRecord) -> Self {
        let mut rounds = self.rounds.clone();
        rounds.push(round);
        Self { rounds }
    }

    /// Append a move to this history in place.
    ///
    /// Owners that keep a single running history use this instead of
    /// [`record`](Self::record) to avoid copying every earlier round.
    pub fn push(&mut self, round: RoundRecord) {
        self.rounds.push(round);
    }

    /// Words solved so far, in order.
    pub fn solved(&self) -> Vec<&str> {
        self.words_with(RoundOutcome::Solved)
    }

    /// Words skipped so far, in order.
    pub fn skipped(&self) -> Vec<&str> {
        self.words_with(RoundOutcome::Skipped)
    }

    /// Number of wrong guesses.
    pub fn misses(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.outcome == RoundOutcome::Missed)
            .count()
    }

    /// Time between the first and the last recorded move.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.rounds.first()?, self.rounds.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records in order.
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    fn words_with(&self, outcome: RoundOutcome) -> Vec<&str> {
        self.rounds
            .iter()
            .filter(|r| r.outcome == outcome)
            .map(|r| r.word.as_str())
            .collect()
    }
}
