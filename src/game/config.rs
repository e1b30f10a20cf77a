//! Game configuration and its validation.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Points awarded for a correct guess unless configured otherwise.
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Words per session unless configured otherwise.
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Tunable game constants.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use unscramble::game::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "max_words": 5 }"#).unwrap();
///
/// assert_eq!(config.max_words, 5);
/// assert_eq!(config.score_increase, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Points added per correct guess
    pub score_increase: u32,
    /// Number of words in a session
    pub max_words: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_increase: DEFAULT_SCORE_INCREASE,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// A rule the configuration breaks
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("score_increase must be greater than zero")]
    ZeroScoreIncrease,

    #[error("max_words must be at least one")]
    ZeroMaxWords,

    #[error("Word bank has {available} words but more than {required} are needed")]
    NotEnoughWords { available: usize, required: usize },

    #[error("A full session of {max_words} words at {score_increase} points overflows the score")]
    ScoreOverflow { score_increase: u32, max_words: usize },
}

/// Errors reading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the configuration against a word bank of `available` words,
    /// collecting every violation.
    pub fn validate(&self, available: usize) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            if self.score_increase == 0 {
                Validation::fail(ConfigViolation::ZeroScoreIncrease)
            } else {
                Validation::success(())
            },
            if self.max_words == 0 {
                Validation::fail(ConfigViolation::ZeroMaxWords)
            } else {
                Validation::success(())
            },
            if available <= self.max_words {
                Validation::fail(ConfigViolation::NotEnoughWords {
                    available,
                    required: self.max_words,
                })
            } else {
                Validation::success(())
            },
            if u64::from(self.score_increase).saturating_mul(self.max_words as u64)
                > u64::from(u32::MAX)
            {
                Validation::fail(ConfigViolation::ScoreOverflow {
                    score_increase: self.score_increase,
                    max_words: self.max_words,
                })
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}
