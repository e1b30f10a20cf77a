//! Property-based tests for the game core.
//!
//! These tests use proptest to check invariants across many randomly
//! generated move sequences and words.

use proptest::prelude::*;
use unscramble::core::{GamePhase, Guard, Phase};
use unscramble::game::GameStateMachine;
use unscramble::words::{scramble_distinct, ShuffleScrambler, WordBank};
use unscramble::GameBuilder;

#[derive(Clone, Debug)]
enum Move {
    Correct,
    Wrong(String),
    Skip,
}

prop_compose! {
    fn arbitrary_move()(variant in 0..3u8, guess in "[a-z ]{0,8}") -> Move {
        match variant {
            0 => Move::Correct,
            1 => Move::Wrong(guess),
            _ => Move::Skip,
        }
    }
}

fn apply(game: &mut GameStateMachine, mv: &Move) {
    match mv {
        Move::Correct => {
            let scrambled = game.ui_state().current_scrambled_word;
            if let Some(word) = game.word_bank().unscramble(&scrambled) {
                let word = word.to_string();
                game.update_user_guess(word);
            }
            game.check_user_guess();
        }
        Move::Wrong(guess) => {
            game.update_user_guess(format!("{}!", guess));
            game.check_user_guess();
        }
        Move::Skip => game.skip_word(),
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_move_sequence(
        seed in any::<u64>(),
        max_words in 1usize..8,
        score_increase in 1u32..50,
        moves in prop::collection::vec(arbitrary_move(), 0..40)
    ) {
        let mut game = GameBuilder::new()
            .seed(seed)
            .max_words(max_words)
            .score_increase(score_increase)
            .build()
            .unwrap();

        for mv in &moves {
            let before = game.ui_state();
            apply(&mut game, mv);
            let after = game.ui_state();

            prop_assert_eq!(after.score % score_increase, 0);
            prop_assert!(after.current_word_count >= 1);
            prop_assert!(after.current_word_count <= max_words);
            prop_assert!(after.score >= before.score);

            if before.is_game_over {
                prop_assert_eq!(&after, &before);
            }
            if !after.is_game_over {
                let word = game.word_bank().unscramble(&after.current_scrambled_word);
                prop_assert!(word.is_some());
                prop_assert_ne!(word.unwrap(), after.current_scrambled_word.as_str());
            }
        }
    }

    #[test]
    fn skip_advances_by_exactly_one(seed in any::<u64>(), skips in 0usize..9) {
        let mut game = GameBuilder::new().seed(seed).build().unwrap();

        for _ in 0..skips {
            let before = game.ui_state();
            game.skip_word();
            let after = game.ui_state();

            prop_assert_eq!(after.score, before.score);
            prop_assert_eq!(after.current_word_count, before.current_word_count + 1);
        }
    }

    #[test]
    fn game_over_iff_last_word_consumed(seed in any::<u64>(), max_words in 1usize..10) {
        let mut game = GameBuilder::new().seed(seed).max_words(max_words).build().unwrap();

        for consumed in 1..=max_words {
            prop_assert_eq!(game.phase(), GamePhase::Playing);
            game.skip_word();
            prop_assert_eq!(game.ui_state().is_game_over, consumed == max_words);
        }
        prop_assert!(game.phase().is_final());
    }

    #[test]
    fn scramble_never_returns_bank_word(seed in any::<u64>()) {
        let bank = WordBank::default();
        let mut scrambler = ShuffleScrambler::seeded(seed);

        for word in bank.words() {
            let scrambled = scramble_distinct(&mut scrambler, word);
            prop_assert_ne!(&scrambled, word);
            prop_assert_eq!(bank.unscramble(&scrambled), Some(word.as_str()));
        }
    }

    #[test]
    fn scramble_differs_for_any_scramblable_word(word in "[a-z]{2,12}") {
        prop_assume!(word.chars().any(|c| Some(c) != word.chars().next()));
        let mut identity = |w: &str| w.to_string();

        prop_assert_ne!(scramble_distinct(&mut identity, &word), word);
    }

    #[test]
    fn not_final_guard_matches_phase(over in any::<bool>()) {
        let phase = if over { GamePhase::GameOver } else { GamePhase::Playing };
        let guard = Guard::<GamePhase>::not_final();
        prop_assert_eq!(guard.check(&phase), !phase.is_final());
    }
}
