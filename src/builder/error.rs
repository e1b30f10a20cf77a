//! Errors raised while building a game.

use crate::game::ConfigViolation;
use crate::words::WordBankError;
use thiserror::Error;

/// Errors that can occur when building a [`GameStateMachine`](crate::game::GameStateMachine).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid game config: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Invalid word list: {0}")]
    WordBank(#[from] WordBankError),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
