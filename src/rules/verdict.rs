//! Submission verdicts and their rendering feedback.

use serde::{Deserialize, Serialize};

/// Outcome of validating one submission.
///
/// Every non-empty submission maps to exactly one verdict. The rejection
/// variants mirror the rule chain: the first rule that fails names the
/// verdict, so a submission that breaks several rules reports only the
/// highest-priority one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Passed every rule; the word was recorded for this session.
    Accepted,
    /// Shorter than the configured minimum letter count.
    TooShort,
    /// The submission is the root word itself.
    SameAsRoot,
    /// Already accepted earlier this session.
    AlreadyUsed,
    /// Not buildable from the root word's letters.
    NotPossible,
    /// The spell-check oracle does not recognize it.
    NotReal,
}

/// Title and message pair for rendering one rejection.
///
/// The wording is stable; hosts may display it verbatim or match on the
/// verdict and supply their own copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Short alert title.
    pub title: &'static str,
    /// One-line explanation.
    pub message: &'static str,
}

impl Verdict {
    /// Check if the submission was accepted.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Rendering feedback for a rejection.
    ///
    /// Returns `None` for [`Verdict::Accepted`], which needs no
    /// explanation. The [`Verdict::TooShort`] message assumes the default
    /// minimum of three letters; hosts that configure a different minimum
    /// supply their own copy.
    #[must_use]
    pub fn feedback(self) -> Option<Feedback> {
        let (title, message) = match self {
            Verdict::Accepted => return None,
            Verdict::TooShort => ("Word too short", "The minimum is three letters."),
            Verdict::SameAsRoot => ("Word is the same as the start word", "Be more original."),
            Verdict::AlreadyUsed => ("Word used already", "Be more original."),
            Verdict::NotPossible => {
                ("Word not possible", "You can't just make them up, you know!")
            }
            Verdict::NotReal => ("Word not recognized", "That isn't a real word."),
        };
        Some(Feedback { title, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_accepted_is_accepted() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::TooShort.is_accepted());
        assert!(!Verdict::SameAsRoot.is_accepted());
        assert!(!Verdict::AlreadyUsed.is_accepted());
        assert!(!Verdict::NotPossible.is_accepted());
        assert!(!Verdict::NotReal.is_accepted());
    }

    #[test]
    fn test_accepted_has_no_feedback() {
        assert!(Verdict::Accepted.feedback().is_none());
    }

    #[test]
    fn test_rejection_feedback_wording() {
        let cases = [
            (Verdict::TooShort, "Word too short", "The minimum is three letters."),
            (
                Verdict::SameAsRoot,
                "Word is the same as the start word",
                "Be more original.",
            ),
            (Verdict::AlreadyUsed, "Word used already", "Be more original."),
            (
                Verdict::NotPossible,
                "Word not possible",
                "You can't just make them up, you know!",
            ),
            (Verdict::NotReal, "Word not recognized", "That isn't a real word."),
        ];

        for (verdict, title, message) in cases {
            let feedback = verdict.feedback().unwrap();
            assert_eq!(feedback.title, title);
            assert_eq!(feedback.message, message);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let verdict = Verdict::NotPossible;
        let json = serde_json::to_string(&verdict).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, back);
    }
}
