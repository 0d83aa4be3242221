//! The fixed set of playable words

use crate::core::Word;
use crate::error::{GameError, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

use super::{WORDS, loader::words_from_slice};

/// Immutable word bank, loaded once at startup
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordBank {
    /// Build a bank from a list of words, dropping duplicates but keeping order
    ///
    /// # Errors
    ///
    /// Returns `GameError::Configuration` if the list is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::Configuration("word bank is empty".to_string()));
        }

        Ok(Self { words, index })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `GameError::Configuration` if the embedded list is empty.
    pub fn embedded() -> Result<Self> {
        Self::new(words_from_slice(WORDS))
    }

    /// A uniformly random word
    #[must_use]
    pub fn random_word(&self) -> &Word {
        self.random_word_with(&mut rand::rng())
    }

    /// A uniformly random word drawn from `rng`
    #[must_use]
    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    /// Case-normalized exact membership test
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        Word::new(candidate).is_ok_and(|w| self.index.contains(&w))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed bank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
