//! Accepted-word tracking for one session.

use im::{HashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::Word;

/// Ordered collection of the words accepted this session.
///
/// Most recently accepted first: new words go to the front, which is the
/// order hosts render. Entries are unique by construction (the rule chain
/// rejects duplicates before they get here) and membership checks are
/// O(1) through a side index. Persistent backing structures make cloning
/// O(1), so rendering layers can snapshot freely.
///
/// ## Example
///
/// ```
/// use scramble::core::Word;
/// use scramble::session::UsedWords;
///
/// let mut used = UsedWords::new();
/// used.record(Word::normalize("wok").unwrap());
/// used.record(Word::normalize("silk").unwrap());
///
/// let order: Vec<&str> = used.iter().map(Word::as_str).collect();
/// assert_eq!(order, ["silk", "wok"]); // newest first
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWords {
    entries: Vector<Word>,
    index: HashSet<Word>,
}

impl UsedWords {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly accepted word at the front.
    ///
    /// Callers guarantee uniqueness by validating first; recording the
    /// same word twice is a contract violation.
    pub fn record(&mut self, word: Word) {
        debug_assert!(
            !self.index.contains(&word),
            "word recorded twice: {word}"
        );
        self.index.insert(word.clone());
        self.entries.push_front(word);
    }

    /// Check whether a word was already accepted this session.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Number of accepted words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no words have been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate newest-first, the display order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter()
    }

    /// Drop every entry. Used when a round restarts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
