//! The game state machine.

use super::config::GameConfig;
use super::state::GameState;
use super::stream::StateStream;
use crate::core::{GamePhase, Guard, RoundHistory, RoundOutcome, RoundRecord};
use crate::words::{scramble_distinct, Scrambler, ShuffleScrambler, WordBank};
use chrono::Utc;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use tokio::sync::watch;
use uuid::Uuid;

/// Owns one game session and publishes its state.
///
/// Moves are `update_user_guess`, `check_user_guess` and `skip_word`.
/// Every move runs to completion before the resulting [`GameState`] is
/// published. Once the session reaches [`GamePhase::GameOver`], checking and
/// skipping are ignored until [`reset_game`](Self::reset_game).
///
/// # Example
///
/// ```rust
/// use unscramble::game::GameStateMachine;
///
/// let mut game = GameStateMachine::new();
/// let state = game.ui_state();
/// let answer = game
///     .word_bank()
///     .unscramble(&state.current_scrambled_word)
///     .unwrap()
///     .to_string();
///
/// game.update_user_guess(answer);
/// game.check_user_guess();
///
/// let state = game.ui_state();
/// assert_eq!(state.score, 20);
/// assert_eq!(state.current_word_count, 2);
/// assert!(!state.is_guessed_word_wrong);
/// ```
pub struct GameStateMachine {
    config: GameConfig,
    bank: WordBank,
    scrambler: Box<dyn Scrambler>,
    rng: StdRng,
    session_id: Uuid,
    // shuffled once per session
    sequence: Vec<String>,
    cursor: usize,
    used_words: HashSet<String>,
    current_word: String,
    user_guess: String,
    state: StateStream,
    history: RoundHistory,
    accepts_moves: Guard<GamePhase>,
}

impl GameStateMachine {
    /// Session with the default configuration and word list.
    pub fn new() -> Self {
        Self::from_parts(
            GameConfig::default(),
            WordBank::default(),
            Box::new(ShuffleScrambler::new()),
            StdRng::from_os_rng(),
        )
    }

    /// Assemble a machine from already validated parts and start a session.
    pub(crate) fn from_parts(
        config: GameConfig,
        bank: WordBank,
        scrambler: Box<dyn Scrambler>,
        rng: StdRng,
    ) -> Self {
        let mut machine = Self {
            config,
            bank,
            scrambler,
            rng,
            session_id: Uuid::new_v4(),
            sequence: Vec::new(),
            cursor: 0,
            used_words: HashSet::new(),
            current_word: String::new(),
            user_guess: String::new(),
            state: StateStream::new(GameState::without_words()),
            history: RoundHistory::new(),
            accepts_moves: Guard::not_final(),
        };
        machine.start_session();
        machine
    }

    /// Replace the pending guess. Does not touch the published state.
    pub fn update_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Compare the pending guess with the active word, ignoring case.
    ///
    /// A match adds the configured points and moves on to the next word.
    /// Anything else, including an empty guess, raises the wrong-guess flag.
    /// The pending guess is cleared either way.
    pub fn check_user_guess(&mut self) {
        let state = self.state.value();
        if !self.accepts_moves.check(&state.phase()) {
            debug!("session {}: guess ignored after game over", self.session_id);
            return;
        }

        if self.user_guess.to_lowercase() == self.current_word {
            let score = state.score.saturating_add(self.config.score_increase);
            debug!(
                "session {}: word {} solved, score {}",
                self.session_id, state.current_word_count, score
            );
            self.record(state.current_word_count, RoundOutcome::Solved, score);
            self.advance(state, score);
        } else {
            debug!(
                "session {}: wrong guess '{}' for word {}",
                self.session_id, self.user_guess, state.current_word_count
            );
            self.record(state.current_word_count, RoundOutcome::Missed, state.score);
            self.state.publish(GameState {
                is_guessed_word_wrong: true,
                ..state
            });
        }
        self.user_guess.clear();
    }

    /// Move on to the next word without scoring.
    pub fn skip_word(&mut self) {
        let state = self.state.value();
        if !self.accepts_moves.check(&state.phase()) {
            debug!("session {}: skip ignored after game over", self.session_id);
            return;
        }

        debug!(
            "session {}: word {} skipped",
            self.session_id, state.current_word_count
        );
        self.record(state.current_word_count, RoundOutcome::Skipped, state.score);
        let score = state.score;
        self.advance(state, score);
    }

    /// Throw the session away and start over with a fresh word order.
    pub fn reset_game(&mut self) {
        info!(
            "session {} reset at score {}",
            self.session_id,
            self.state.value().score
        );
        self.start_session();
    }

    /// Current snapshot.
    pub fn ui_state(&self) -> GameState {
        self.state.value()
    }

    /// Receiver notified whenever the snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state.subscribe()
    }

    /// The pending guess.
    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    pub fn phase(&self) -> GamePhase {
        self.state.value().phase()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.bank
    }

    /// Moves made in the current session.
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    fn start_session(&mut self) {
        let mut sequence = self.bank.words().to_vec();
        sequence.shuffle(&mut self.rng);

        self.session_id = Uuid::new_v4();
        self.sequence = sequence;
        self.cursor = 0;
        self.used_words.clear();
        self.user_guess.clear();
        self.history = RoundHistory::new();

        let initial = match self.draw_word() {
            Some(word) => self.load(word, 1, 0),
            None => GameState::without_words(),
        };
        self.state.publish(initial);
        info!(
            "session {} started: {} words, {} points each",
            self.session_id, self.config.max_words, self.config.score_increase
        );
    }

    /// Shared tail of a correct guess and a skip.
    fn advance(&mut self, state: GameState, score: u32) {
        let next = if state.current_word_count >= self.config.max_words {
            None
        } else {
            self.draw_word()
        };

        let next_state = match next {
            Some(word) => self.load(word, state.current_word_count + 1, score),
            None => {
                info!(
                    "session {} over: score {} after {} words",
                    self.session_id, score, state.current_word_count
                );
                GameState {
                    score,
                    is_guessed_word_wrong: false,
                    is_game_over: true,
                    ..state
                }
            }
        };
        self.user_guess.clear();
        self.state.publish(next_state);
    }

    /// Make `word` the active word and build its snapshot.
    fn load(&mut self, word: String, count: usize, score: u32) -> GameState {
        let scrambled = scramble_distinct(&mut *self.scrambler, &word);
        self.current_word = word;
        GameState {
            current_scrambled_word: scrambled,
            current_word_count: count,
            score,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    /// Next word from the session order that has not been used yet.
    fn draw_word(&mut self) -> Option<String> {
        while let Some(word) = self.sequence.get(self.cursor) {
            self.cursor += 1;
            if self.used_words.insert(word.clone()) {
                return Some(word.clone());
            }
        }
        None
    }

    fn record(&mut self, word_number: usize, outcome: RoundOutcome, score: u32) {
        self.history.push(RoundRecord {
            word_number,
            word: self.current_word.clone(),
            outcome,
            score,
            timestamp: Utc::now(),
        });
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
