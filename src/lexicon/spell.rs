//! Spell-check oracle boundary.
//!
//! Dictionary membership is not implemented by the engine. It is an
//! injected capability behind the `SpellChecker` trait, so hosts plug in a
//! platform checker and tests use a deterministic fake.

use rustc_hash::{FxHashMap, FxHashSet};

/// Dictionary membership oracle.
///
/// `word` arrives normalized (trimmed, lowercase); `language` is the tag
/// from [`GameConfig`](crate::core::GameConfig), passed through opaquely.
/// Implementations answer whether the word is correctly spelled in that
/// language.
///
/// The `Send + Sync` bound lets one oracle back many concurrent sessions;
/// the trait only ever takes `&self`.
///
/// Closures with the right shape implement the trait directly:
///
/// ```
/// use scramble::lexicon::SpellChecker;
///
/// let oracle = |word: &str, _language: &str| word != "xyz";
/// assert!(oracle.is_real_word("wok", "en"));
/// assert!(!oracle.is_real_word("xyz", "en"));
/// ```
pub trait SpellChecker: Send + Sync {
    /// Report whether `word` is a real word in `language`.
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Oracle backed by in-memory word lists, one per language tag.
///
/// The bundled real implementation for hosts without a platform checker.
/// Lookup is a hash-set probe; languages the checker was never given a
/// list for report every word as not real.
#[derive(Clone, Debug, Default)]
pub struct WordListChecker {
    lists: FxHashMap<String, FxHashSet<String>>,
}

impl WordListChecker {
    /// Create a checker with no word lists. Rejects everything until a
    /// list is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word list for a language, lowercasing each entry.
    #[must_use]
    pub fn with_list<I, S>(mut self, language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self.lists.insert(language.into(), list);
        self
    }

    /// Merge newline-delimited text into a language's word list.
    ///
    /// Same shape as the root word pool format: one word per line, blank
    /// lines skipped, entries lowercased.
    pub fn add_list_text(&mut self, language: impl Into<String>, text: &str) {
        let list = self.lists.entry(language.into()).or_default();
        for line in text.lines() {
            let entry = line.trim();
            if !entry.is_empty() {
                list.insert(entry.to_lowercase());
            }
        }
    }

    /// Number of words known for a language.
    #[must_use]
    pub fn list_len(&self, language: &str) -> usize {
        self.lists.get(language).map_or(0, FxHashSet::len)
    }
}

impl SpellChecker for WordListChecker {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.lists
            .get(language)
            .map_or(false, |list| list.contains(word))
    }
}

/// Oracle that accepts every word. Baseline for tests and wiring.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl SpellChecker for AcceptAll {
    fn is_real_word(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// Oracle that rejects every word. Baseline for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenyAll;

impl SpellChecker for DenyAll {
    fn is_real_word(&self, _word: &str, _language: &str) -> bool {
        false
    }
}
