//! Builder for game sessions.

use crate::builder::error::BuildError;
use crate::game::{GameConfig, GameStateMachine};
use crate::words::{Scrambler, ShuffleScrambler, WordBank};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stillwater::validation::Validation;

/// Builder for [`GameStateMachine`] with a fluent API.
///
/// Everything is optional: an empty builder produces the classic game
/// (default word list, 10 words, 20 points each).
pub struct GameBuilder {
    config: GameConfig,
    words: Option<Vec<String>>,
    scrambler: Option<Box<dyn Scrambler>>,
    seed: Option<u64>,
}

impl GameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            words: None,
            scrambler: None,
            seed: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn score_increase(mut self, points: u32) -> Self {
        self.config.score_increase = points;
        self
    }

    pub fn max_words(mut self, n: usize) -> Self {
        self.config.max_words = n;
        self
    }

    /// Candidate words. Defaults to [`DEFAULT_WORDS`](crate::words::DEFAULT_WORDS).
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Custom scrambler. Defaults to [`ShuffleScrambler`].
    pub fn scrambler<S>(mut self, scrambler: S) -> Self
    where
        S: Scrambler + 'static,
    {
        self.scrambler = Some(Box::new(scrambler));
        self
    }

    /// Seed word order and, unless a scrambler was given, scrambling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate everything and start the first session.
    ///
    /// Config violations are collected, not reported one at a time.
    pub fn build(self) -> Result<GameStateMachine, BuildError> {
        let bank = match self.words {
            Some(words) => WordBank::new(words)?,
            None => WordBank::default(),
        };

        if let Validation::Failure(violations) = self.config.validate(bank.len()) {
            return Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            ));
        }

        let (rng, default_scrambler) = match self.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                ShuffleScrambler::seeded(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), ShuffleScrambler::new()),
        };
        let scrambler = self
            .scrambler
            .unwrap_or_else(|| Box::new(default_scrambler) as Box<dyn Scrambler>);

        Ok(GameStateMachine::from_parts(self.config, bank, scrambler, rng))
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
