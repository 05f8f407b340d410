//! Validation rule chain integration tests.
//!
//! These tests pin each rule individually, the priority order between
//! rules, and the multiset/normalization properties the chain is built
//! on.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use proptest::prelude::*;

use scramble::core::{GameConfig, LetterPool, Word};
use scramble::lexicon::{AcceptAll, DenyAll};
use scramble::rules::{Verdict, WordValidator};
use scramble::session::UsedWords;

fn word(s: &str) -> Word {
    Word::normalize(s).expect("test words are non-empty")
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: submissions below the minimum letter count are rejected.
#[test]
fn test_rejects_below_minimum_length() {
    let config = GameConfig::default();
    let validator = WordValidator::new(&AcceptAll, &config);
    let root = word("silkworm");

    assert_eq!(validator.validate(&word("ow"), &root, &UsedWords::new()), Verdict::TooShort);
    assert_eq!(validator.validate(&word("s"), &root, &UsedWords::new()), Verdict::TooShort);
    assert_eq!(validator.validate(&word("ilk"), &root, &UsedWords::new()), Verdict::Accepted);
}

/// Rule 1 honors a configured minimum, not a hardcoded one.
#[test]
fn test_minimum_length_is_configurable() {
    let config = GameConfig::default().with_min_word_len(4);
    let validator = WordValidator::new(&AcceptAll, &config);
    let root = word("silkworm");

    assert_eq!(validator.validate(&word("ilk"), &root, &UsedWords::new()), Verdict::TooShort);
    assert_eq!(validator.validate(&word("silk"), &root, &UsedWords::new()), Verdict::Accepted);
}

/// Rule 2: the root word itself is never a valid answer, in any casing.
#[test]
fn test_rejects_root_word_any_casing() {
    let config = GameConfig::default();
    let validator = WordValidator::new(&AcceptAll, &config);
    let root = word("silkworm");

    // Casing differences vanish at normalization, before the rules run.
    let shouted = Word::normalize("SILKWORM").unwrap();
    assert_eq!(validator.validate(&shouted, &root, &UsedWords::new()), Verdict::SameAsRoot);
}

/// Rule 3: a word is accepted at most once per round.
#[test]
fn test_rejects_previously_used_word() {
    let config = GameConfig::default();
    let validator = WordValidator::new(&AcceptAll, &config);
    let root = word("silkworm");

    let mut used = UsedWords::new();
    used.record(word("wok"));

    assert_eq!(validator.validate(&word("wok"), &root, &used), Verdict::AlreadyUsed);
    assert_eq!(validator.validate(&word("silk"), &root, &used), Verdict::Accepted);
}

/// Rule 4: letter availability is a multiset test, not membership.
#[test]
fn test_rejects_overdrawn_letters() {
    let config = GameConfig::default();
    let validator = WordValidator::new(&AcceptAll, &config);

    // One 'l' in "silkworm", so "mill" overdraws it.
    let root = word("silkworm");
    assert_eq!(validator.validate(&word("mill"), &root, &UsedWords::new()), Verdict::NotPossible);
    assert_eq!(validator.validate(&word("ilk"), &root, &UsedWords::new()), Verdict::Accepted);

    // Every letter of "aaa" appears in "aabbcc", but not three times.
    let root = word("aabbcc");
    assert_eq!(validator.validate(&word("aaa"), &root, &UsedWords::new()), Verdict::NotPossible);
    assert_eq!(validator.validate(&word("aab"), &root, &UsedWords::new()), Verdict::Accepted);
}

/// Rule 5: the oracle has the final word.
#[test]
fn test_rejects_word_the_oracle_denies() {
    let config = GameConfig::default();
    let validator = WordValidator::new(&DenyAll, &config);
    let root = word("silkworm");

    // Buildable, novel, long enough - but not a real word.
    assert_eq!(validator.validate(&word("krow"), &root, &UsedWords::new()), Verdict::NotReal);
}

// =============================================================================
// Rule Priority
// =============================================================================

/// The first failing rule names the verdict; later rules never run.
#[test]
fn test_first_failing_rule_wins() {
    let config = GameConfig::default();
    let validator = WordValidator::new(&DenyAll, &config);
    let root = word("silkworm");

    // Too short, unbuildable, and not real: length wins.
    assert_eq!(validator.validate(&word("zz"), &root, &UsedWords::new()), Verdict::TooShort);

    // Root word and not real: originality wins.
    assert_eq!(validator.validate(&word("silkworm"), &root, &UsedWords::new()), Verdict::SameAsRoot);

    // Used, unbuildable, and not real: novelty wins.
    let mut used = UsedWords::new();
    used.record(word("zzz"));
    assert_eq!(validator.validate(&word("zzz"), &root, &used), Verdict::AlreadyUsed);

    // Unbuildable and not real: availability wins.
    assert_eq!(validator.validate(&word("xyz"), &root, &UsedWords::new()), Verdict::NotPossible);
}

/// The oracle is only consulted for candidates that survive rules 1-4.
#[test]
fn test_oracle_consulted_only_when_needed() {
    let calls = AtomicU32::new(0);
    let oracle = |_word: &str, _language: &str| {
        calls.fetch_add(1, Ordering::Relaxed);
        true
    };

    let config = GameConfig::default();
    let validator = WordValidator::new(&oracle, &config);
    let root = word("silkworm");

    let _ = validator.validate(&word("zz"), &root, &UsedWords::new());
    let _ = validator.validate(&word("silkworm"), &root, &UsedWords::new());
    let _ = validator.validate(&word("xyz"), &root, &UsedWords::new());
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    let _ = validator.validate(&word("wok"), &root, &UsedWords::new());
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Normalization is idempotent, and only whitespace-only input
    /// normalizes to nothing.
    #[test]
    fn prop_normalize_idempotent(raw in "[ \\t]{0,3}[a-zA-Z]{0,12}[ \\t]{0,3}") {
        match Word::normalize(&raw) {
            Some(once) => {
                let twice = Word::normalize(once.as_str()).expect("stays non-empty");
                prop_assert_eq!(once, twice);
            }
            None => prop_assert!(raw.trim().is_empty()),
        }
    }

    /// Letter availability is exactly the multiset-subset relation on
    /// letter counts.
    #[test]
    fn prop_can_build_matches_letter_counts(
        root in "[a-z]{1,10}",
        candidate in "[a-z]{1,10}",
    ) {
        let root = word(&root);
        let candidate = word(&candidate);

        let mut root_counts: HashMap<char, usize> = HashMap::new();
        for c in root.letters() {
            *root_counts.entry(c).or_insert(0) += 1;
        }

        let mut candidate_counts: HashMap<char, usize> = HashMap::new();
        for c in candidate.letters() {
            *candidate_counts.entry(c).or_insert(0) += 1;
        }

        let subset = candidate_counts
            .iter()
            .all(|(c, n)| root_counts.get(c).copied().unwrap_or(0) >= *n);

        prop_assert_eq!(LetterPool::new(&root).can_build(&candidate), subset);
    }
}
