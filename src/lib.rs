//! Unscramble: the game core of a word-scramble guessing game
//!
//! The player is shown a scrambled word, types a guess, and either checks it
//! or skips the word. The core keeps score, serves each word of a session
//! once, and publishes an immutable [`GameState`] snapshot after every move
//! for a UI layer to observe.
//!
//! # Core Concepts
//!
//! - **Phases**: a session is `Playing` until its last word is consumed, then `GameOver`
//! - **Word bank**: validated candidates with a pure `unscramble` lookup
//! - **State stream**: one current snapshot, subscribers notified on change
//! - **History**: immutable record of every move in a session
//!
//! # Example
//!
//! ```rust
//! use unscramble::builder::GameBuilder;
//!
//! let mut game = GameBuilder::new().max_words(3).seed(7).build().unwrap();
//!
//! game.update_user_guess("definitely wrong");
//! game.check_user_guess();
//! assert!(game.ui_state().is_guessed_word_wrong);
//!
//! game.skip_word();
//! game.skip_word();
//! game.skip_word();
//!
//! let state = game.ui_state();
//! assert!(state.is_game_over);
//! assert_eq!(state.score, 0);
//! assert_eq!(state.current_word_count, 3);
//! ```

pub mod builder;
pub mod core;
pub mod game;
pub mod words;

// Re-export commonly used types
pub use crate::builder::{BuildError, GameBuilder};
pub use crate::core::{GamePhase, Phase, RoundHistory, RoundOutcome};
pub use crate::game::{GameConfig, GameState, GameStateMachine};
pub use crate::words::{Scrambler, WordBank};
