//! Game phases.
//!
//! A session is always in exactly one phase. Phases are plain values that
//! can be inspected without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the phases a game session moves through.
///
/// All methods are pure. A phase describes where a session is, not how it
/// got there.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: phases are compared when gating moves
/// - `Debug`: for diagnostics and logging
/// - `Serialize` + `Deserialize`: phases travel inside UI snapshots
pub trait Phase:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the phase for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal phase.
    ///
    /// No further moves are accepted once a session reaches a final phase.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Phase of an unscramble session.
///
/// # Example
///
/// ```rust
/// use unscramble::core::{GamePhase, Phase};
///
/// assert!(!GamePhase::Playing.is_final());
/// assert!(GamePhase::GameOver.is_final());
/// assert_eq!(GamePhase::GameOver.name(), "GameOver");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Words are still being served
    #[default]
    Playing,
    /// The last word has been consumed
    GameOver,
}

impl Phase for GamePhase {
    fn name(&self) -> &str {
        match self {
            Self::Playing => "Playing",
            Self::GameOver => "GameOver",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(GamePhase::Playing.name(), "Playing");
        assert_eq!(GamePhase::GameOver.name(), "GameOver");
    }

    #[test]
    fn only_game_over_is_final() {
        assert!(!GamePhase::Playing.is_final());
        assert!(GamePhase::GameOver.is_final());
    }

    #[test]
    fn default_phase_is_playing() {
        assert_eq!(GamePhase::default(), GamePhase::Playing);
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&GamePhase::GameOver).unwrap();
        assert_eq!(json, "\"GameOver\"");

        let deserialized: GamePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, GamePhase::GameOver);
    }
}
