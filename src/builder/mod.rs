//! Builder API for game sessions.
//!
//! [`GameBuilder`] collects configuration, words and randomness sources,
//! validates them together and hands back a running
//! [`GameStateMachine`](crate::game::GameStateMachine).

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::GameBuilder;

use crate::game::GameStateMachine;

/// Build a session over a custom word list with the default scoring.
///
/// # Example
///
/// ```
/// use unscramble::builder::with_words;
///
/// let game = with_words(
///     ["apple", "banana", "cherry", "grape", "lemon", "mango",
///      "kiwi", "orange", "peach", "pear", "plum"],
/// )
/// .unwrap();
///
/// assert_eq!(game.word_bank().len(), 11);
/// ```
pub fn with_words<I, S>(words: I) -> Result<GameStateMachine, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GameBuilder::new().words(words).build()
}
