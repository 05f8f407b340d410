//! Normalized word representation.
//!
//! Every word that crosses the engine boundary is normalized exactly once:
//! surrounding whitespace trimmed, then lowercased. `Word` encodes the result
//! in the type system, so holding one means normalization already happened
//! and the string is non-empty.

use serde::{Deserialize, Serialize};

/// A normalized word: trimmed, lowercase, non-empty.
///
/// Construct via [`Word::normalize`], which returns `None` when nothing
/// remains after trimming. Because every `Word` is already lowercase,
/// case-insensitive comparisons elsewhere in the engine are plain `==`
/// between two `Word`s.
///
/// ## Example
///
/// ```
/// use scramble::core::Word;
///
/// let word = Word::normalize("  Worm ").unwrap();
/// assert_eq!(word.as_str(), "worm");
/// assert_eq!(word.letter_count(), 4);
///
/// // Whitespace-only input is not a word at all.
/// assert!(Word::normalize("   ").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word(String);

impl Word {
    /// Normalize raw input into a `Word`.
    ///
    /// Trims surrounding whitespace and lowercases what remains. Returns
    /// `None` if the input was empty or whitespace-only, which callers
    /// treat as "nothing was submitted".
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// The normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters, counted as Unicode scalar values.
    ///
    /// Byte length would over-count non-ASCII letters.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Iterate over the word's letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
