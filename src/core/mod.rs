//! Core game types.
//!
//! This module contains the pure pieces of the game:
//! - Session phases via the `Phase` trait and `GamePhase`
//! - Guard predicates that gate moves by phase
//! - Immutable round history

mod guard;
mod history;
mod phase;

pub use guard::Guard;
pub use history::{RoundHistory, RoundOutcome, RoundRecord};
pub use phase::{GamePhase, Phase};
