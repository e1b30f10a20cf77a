//! The playable game.
//!
//! # Key Concepts
//!
//! - **GameConfig**: points per correct guess and words per session
//! - **GameState**: immutable snapshot published after every move
//! - **StateStream**: single-value holder the UI observes
//! - **GameStateMachine**: owns a session and applies moves

mod config;
mod machine;
mod state;
mod stream;

pub use config::{
    ConfigError, ConfigViolation, GameConfig, DEFAULT_MAX_WORDS, DEFAULT_SCORE_INCREASE,
};
pub use machine::GameStateMachine;
pub use state::GameState;
pub use stream::StateStream;
