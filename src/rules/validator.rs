//! The word validation rule chain.
//!
//! Rules run in a fixed priority order and short-circuit: the first
//! failing rule names the verdict. A submission that is both too short
//! and already used reports `TooShort`, and the oracle is only consulted
//! for candidates that survived every cheaper rule.

use crate::core::{GameConfig, LetterPool, Word};
use crate::lexicon::SpellChecker;
use crate::session::UsedWords;

use super::verdict::Verdict;

/// Pure validation over one submission.
///
/// Borrows the oracle and configuration, holds no session state, and
/// mutates nothing. Recording accepted words is the session's job.
pub struct WordValidator<'a, C: SpellChecker + ?Sized> {
    checker: &'a C,
    config: &'a GameConfig,
}

impl<'a, C: SpellChecker + ?Sized> WordValidator<'a, C> {
    /// Create a validator over the given oracle and configuration.
    #[must_use]
    pub fn new(checker: &'a C, config: &'a GameConfig) -> Self {
        Self { checker, config }
    }

    /// Validate one candidate against the root word and the words already
    /// accepted this session.
    ///
    /// Rule order, first failure wins:
    /// 1. minimum length
    /// 2. not the root word itself
    /// 3. not already used
    /// 4. buildable from the root word's letters
    /// 5. recognized by the spell-check oracle
    #[must_use]
    pub fn validate(&self, candidate: &Word, root: &Word, used: &UsedWords) -> Verdict {
        if !self.is_long_enough(candidate) {
            return Verdict::TooShort;
        }
        if candidate == root {
            return Verdict::SameAsRoot;
        }
        if used.contains(candidate) {
            return Verdict::AlreadyUsed;
        }
        if !Self::is_possible(candidate, root) {
            return Verdict::NotPossible;
        }
        if !self.is_real(candidate) {
            return Verdict::NotReal;
        }
        Verdict::Accepted
    }

    /// Rule 1: at least the configured minimum letter count.
    fn is_long_enough(&self, candidate: &Word) -> bool {
        candidate.letter_count() >= self.config.min_word_len
    }

    /// Rule 4: every candidate letter consumable from the root's letters,
    /// one occurrence per use.
    fn is_possible(candidate: &Word, root: &Word) -> bool {
        LetterPool::new(root).can_build(candidate)
    }

    /// Rule 5: the one oracle call, made in the configured language.
    fn is_real(&self, candidate: &Word) -> bool {
        self.checker
            .is_real_word(candidate.as_str(), &self.config.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{AcceptAll, DenyAll};

    fn word(s: &str) -> Word {
        Word::normalize(s).unwrap()
    }

    #[test]
    fn test_accepts_buildable_real_word() {
        let config = GameConfig::default();
        let validator = WordValidator::new(&AcceptAll, &config);

        let verdict = validator.validate(&word("wok"), &word("silkworm"), &UsedWords::new());
        assert_eq!(verdict, Verdict::Accepted);
    }

    #[test]
    fn test_short_circuit_stops_at_first_failure() {
        let config = GameConfig::default();
        let validator = WordValidator::new(&DenyAll, &config);

        // "zz" is too short, unbuildable, and not real; length wins.
        let verdict = validator.validate(&word("zz"), &word("silkworm"), &UsedWords::new());
        assert_eq!(verdict, Verdict::TooShort);

        // Unbuildable and not real; availability wins over the oracle.
        let verdict = validator.validate(&word("xyz"), &word("silkworm"), &UsedWords::new());
        assert_eq!(verdict, Verdict::NotPossible);
    }

    #[test]
    fn test_validate_does_not_record() {
        let config = GameConfig::default();
        let validator = WordValidator::new(&AcceptAll, &config);
        let used = UsedWords::new();

        let verdict = validator.validate(&word("wok"), &word("silkworm"), &used);
        assert_eq!(verdict, Verdict::Accepted);
        assert!(used.is_empty());
    }

    #[test]
    fn test_works_through_a_trait_object() {
        let config = GameConfig::default();
        let checker: &dyn SpellChecker = &AcceptAll;
        let validator = WordValidator::new(checker, &config);

        let verdict = validator.validate(&word("ilk"), &word("silkworm"), &UsedWords::new());
        assert_eq!(verdict, Verdict::Accepted);
    }
}
