//! Candidate words and scrambling.
//!
//! A [`WordBank`] holds the normalised candidate words for a session and
//! answers the inverse question: given a scrambled word, which word was it?
//! Because no two words in a bank may be anagrams of each other, the answer
//! is unique and [`WordBank::unscramble`] is a pure lookup.

mod list;
mod scramble;

pub use list::DEFAULT_WORDS;
pub use scramble::{scramble_distinct, Scrambler, ShuffleScrambler, MAX_SCRAMBLE_ATTEMPTS};

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while assembling a word bank
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WordBankError {
    #[error("Word bank is empty")]
    Empty,

    #[error("Word '{word}' has fewer than two distinct letters and cannot be scrambled")]
    Unscramblable { word: String },

    #[error("Words '{first}' and '{second}' are anagrams of each other")]
    Anagrams { first: String, second: String },
}

/// Sorted lowercase letters of a word. Anagrams share a key.
pub(crate) fn anagram_key(word: &str) -> String {
    let mut letters: Vec<char> = word.to_lowercase().chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Validated, normalised list of candidate words.
///
/// # Example
///
/// ```rust
/// use unscramble::words::WordBank;
///
/// let bank = WordBank::new(["Tiger", "lion", "tiger"]).unwrap();
///
/// assert_eq!(bank.words(), ["tiger", "lion"]);
/// assert_eq!(bank.unscramble("NOLI"), Some("lion"));
/// assert_eq!(bank.unscramble("bear"), None);
/// ```
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<String>,
    by_key: HashMap<String, usize>,
}

impl WordBank {
    /// Build a bank from raw words.
    ///
    /// Entries are trimmed and lowercased; repeated entries are dropped,
    /// keeping the first occurrence.
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self {
            words: Vec::new(),
            by_key: HashMap::new(),
        };

        for raw in words {
            let word = raw.as_ref().trim().to_lowercase();
            if bank.words.contains(&word) {
                continue;
            }
            if !is_scramblable(&word) {
                return Err(WordBankError::Unscramblable { word });
            }

            let key = anagram_key(&word);
            if let Some(&existing) = bank.by_key.get(&key) {
                return Err(WordBankError::Anagrams {
                    first: bank.words[existing].clone(),
                    second: word,
                });
            }
            bank.by_key.insert(key, bank.words.len());
            bank.words.push(word);
        }

        if bank.words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(bank)
    }

    /// Find the bank word whose letters the scrambled word uses.
    ///
    /// Case-insensitive. Returns `None` when no bank word matches.
    pub fn unscramble(&self, scrambled: &str) -> Option<&str> {
        self.by_key
            .get(&anagram_key(scrambled))
            .map(|&idx| self.words[idx].as_str())
    }

    /// Check if a word is in the bank (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.unscramble(word)
            .is_some_and(|found| found == word.to_lowercase())
    }

    /// Normalised words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBank {
    /// Bank over [`DEFAULT_WORDS`].
    fn default() -> Self {
        let words: Vec<String> = DEFAULT_WORDS.iter().map(|w| w.to_string()).collect();
        let by_key = words
            .iter()
            .enumerate()
            .map(|(idx, w)| (anagram_key(w), idx))
            .collect();
        Self { words, by_key }
    }
}

fn is_scramblable(word: &str) -> bool {
    let mut letters = word.chars();
    match letters.next() {
        Some(first) => letters.any(|c| c != first),
        None => false,
    }
}
