//! Snapshot of a game as the UI sees it.

use crate::core::GamePhase;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a session.
///
/// A new snapshot is published after every move; readers never see a
/// half-updated one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Scrambled form of the active word
    pub current_scrambled_word: String,
    /// 1-based index of the active word
    pub current_word_count: usize,
    /// Points earned so far
    pub score: u32,
    /// Whether the last checked guess was wrong
    pub is_guessed_word_wrong: bool,
    /// Whether the last word has been consumed
    pub is_game_over: bool,
}

impl GameState {
    /// First snapshot of a session.
    pub fn first_word(scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    /// Snapshot of a session that had no word to serve.
    pub(crate) fn without_words() -> Self {
        Self {
            is_game_over: true,
            ..Self::first_word(String::new())
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_starts_clean() {
        let state = GameState::first_word("tca".to_string());

        assert_eq!(state.current_scrambled_word, "tca");
        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_guessed_word_wrong);
        assert!(!state.is_game_over);
        assert_eq!(state.phase(), GamePhase::Playing);
    }

    #[test]
    fn game_over_flag_maps_to_phase() {
        let state = GameState {
            is_game_over: true,
            ..GameState::first_word("tca".to_string())
        };
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn wordless_session_is_over_at_word_one() {
        let state = GameState::without_words();

        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 0);
        assert!(state.is_game_over);
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = GameState::first_word("tca".to_string());
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
