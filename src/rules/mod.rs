//! The validation rule chain and its verdicts.
//!
//! Submissions pass through five rules in a fixed priority order:
//! - Minimum length
//! - Originality against the root word
//! - Novelty against the words already used
//! - Letter availability (a multiset test, not membership)
//! - Dictionary membership via the spell-check oracle
//!
//! The first failing rule decides the `Verdict`; later rules never run.

pub mod validator;
pub mod verdict;

pub use validator::WordValidator;
pub use verdict::{Feedback, Verdict};
