//! Letter multiset for the availability rule.
//!
//! `LetterPool` holds the letters of one word as a consumable multiset:
//! taking a letter removes one occurrence, so a letter that appears twice
//! in the source word can be taken exactly twice.

use smallvec::SmallVec;

use super::word::Word;

/// Consumable multiset of a word's letters.
///
/// Backed by an inline vector. Root words are short, so the common case
/// never touches the heap.
///
/// ## Example
///
/// ```
/// use scramble::core::{LetterPool, Word};
///
/// let root = Word::normalize("silkworm").unwrap();
/// let mut pool = LetterPool::new(&root);
///
/// assert!(pool.take('s'));
/// assert!(!pool.take('s')); // only one 's' in "silkworm"
///
/// let ilk = Word::normalize("ilk").unwrap();
/// assert!(LetterPool::new(&root).can_build(&ilk));
/// ```
#[derive(Clone, Debug)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Create a pool holding each letter of `word`, with multiplicity.
    #[must_use]
    pub fn new(word: &Word) -> Self {
        Self {
            letters: word.letters().collect(),
        }
    }

    /// Take one occurrence of `letter` out of the pool.
    ///
    /// Returns `false` and leaves the pool unchanged when no occurrence
    /// remains. Order inside the pool is not meaningful, so removal swaps
    /// with the last element.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Multiset-subset test: can `word` be built from the remaining
    /// letters, consuming one occurrence per use?
    ///
    /// Works on a scratch copy and fails on the first letter with no
    /// occurrence left; `self` is unchanged.
    #[must_use]
    pub fn can_build(&self, word: &Word) -> bool {
        let mut scratch = self.clone();
        word.letters().all(|letter| scratch.take(letter))
    }

    /// Number of letters remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }

    /// Check if every letter has been taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
