//! Letter scrambling.

use super::anagram_key;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of scrambler calls before falling back to a rotation.
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 32;

/// Produces a permutation of a word's letters.
///
/// Implementations may return the word unchanged; [`scramble_distinct`]
/// takes care of retrying. Closures `FnMut(&str) -> String` implement this
/// trait too.
pub trait Scrambler: Send {
    fn scramble(&mut self, word: &str) -> String;
}

impl<F> Scrambler for F
where
    F: FnMut(&str) -> String + Send,
{
    fn scramble(&mut self, word: &str) -> String {
        self(word)
    }
}

/// Scrambler that shuffles letters uniformly at random.
#[derive(Debug, Clone)]
pub struct ShuffleScrambler {
    rng: StdRng,
}

impl ShuffleScrambler {
    /// Scrambler seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible scrambler.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShuffleScrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler for ShuffleScrambler {
    fn scramble(&mut self, word: &str) -> String {
        let mut letters: Vec<char> = word.chars().collect();
        letters.shuffle(&mut self.rng);
        letters.into_iter().collect()
    }
}

/// Scramble `word` into a permutation that differs from it.
///
/// Output that is not a permutation of `word`, or that equals it, is
/// discarded. After [`MAX_SCRAMBLE_ATTEMPTS`] discarded results the word is
/// rotated left by one letter, which differs from the original for any word
/// with at least two distinct letters.
///
/// # Example
///
/// ```rust
/// use unscramble::words::scramble_distinct;
///
/// let mut identity = |w: &str| w.to_string();
/// assert_eq!(scramble_distinct(&mut identity, "cat"), "atc");
/// ```
pub fn scramble_distinct(scrambler: &mut dyn Scrambler, word: &str) -> String {
    let key = anagram_key(word);
    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        let candidate = scrambler.scramble(word);
        if candidate != word && anagram_key(&candidate) == key {
            return candidate;
        }
    }
    log::debug!("scrambler kept returning '{}', rotating instead", word);
    rotate(word)
}

fn rotate(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    if !letters.is_empty() {
        letters.rotate_left(1);
    }
    letters.into_iter().collect()
}
