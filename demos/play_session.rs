//! Play Session
//!
//! This example drives one full game the way a UI would.
//!
//! Key concepts:
//! - Building a session with a custom config and a fixed seed
//! - Reading snapshots after every move
//! - Wrong guesses, correct guesses and skips
//! - Reviewing the round history once the game is over
//!
//! Run with: cargo run --example play_session

use unscramble::core::Phase;
use unscramble::GameBuilder;

fn main() {
    println!("=== Unscramble Session Example ===\n");

    let mut game = GameBuilder::new()
        .max_words(5)
        .score_increase(10)
        .seed(2024)
        .build()
        .unwrap();

    let mut turn = 0;
    while !game.phase().is_final() {
        turn += 1;
        let state = game.ui_state();
        println!(
            "Word {}: '{}' (score {})",
            state.current_word_count, state.current_scrambled_word, state.score
        );

        let answer = game
            .word_bank()
            .unscramble(&state.current_scrambled_word)
            .unwrap()
            .to_string();

        match turn % 3 {
            // miss once, then get it right
            0 => {
                game.update_user_guess("nope");
                game.check_user_guess();
                println!(
                    "  guessed 'nope' -> wrong: {}",
                    game.ui_state().is_guessed_word_wrong
                );
                game.update_user_guess(answer.clone());
                game.check_user_guess();
                println!("  guessed '{}' -> correct", answer);
            }
            1 => {
                game.update_user_guess(answer.clone());
                game.check_user_guess();
                println!("  guessed '{}' -> correct", answer);
            }
            _ => {
                game.skip_word();
                println!("  skipped '{}'", answer);
            }
        }
    }

    let state = game.ui_state();
    let history = game.history();
    println!("\nGame over after {} words", state.current_word_count);
    println!("Final score: {}", state.score);
    println!("Solved: {:?}", history.solved());
    println!("Skipped: {:?}", history.skipped());
    println!("Wrong guesses: {}", history.misses());

    println!("\n=== Example Complete ===");
}
