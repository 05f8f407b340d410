//! Root word pool.
//!
//! The pool holds the candidate root words a session can start from. The
//! engine performs no I/O: hosts load the word-list bytes themselves and
//! hand the text to [`WordPool::parse`]; `start` then draws one candidate
//! uniformly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, Word};

/// Ordered pool of candidate root words.
///
/// ## Example
///
/// ```
/// use scramble::lexicon::WordPool;
///
/// let pool = WordPool::parse("silkworm\nclarinet\n\nMonastery\n");
/// assert_eq!(pool.len(), 3); // the blank line is skipped
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Parse the newline word-list format: UTF-8 text, one word per line.
    ///
    /// Each line is normalized exactly like a submission, so pool entries
    /// are trimmed and lowercase. Lines that normalize to nothing (empty
    /// or whitespace-only) are skipped. All-blank input yields an empty
    /// pool; the error for that surfaces at session start, never as a
    /// silently substituted fallback word.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let words: Vec<Word> = text.lines().filter_map(Word::normalize).collect();
        debug!(words = words.len(), "parsed root word pool");
        Self { words }
    }

    /// Build a pool from already-normalized words, order preserved.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Number of candidate root words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the pool has no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the candidates in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Draw one candidate uniformly at random.
    ///
    /// Returns `None` for an empty pool.
    #[must_use]
    pub fn choose<'a>(&'a self, rng: &mut GameRng) -> Option<&'a Word> {
        rng.choose(&self.words)
    }
}
