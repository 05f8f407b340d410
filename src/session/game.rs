//! Game session lifecycle: start, submit, restart.

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::{GameConfig, GameRng, Word};
use crate::lexicon::{SpellChecker, WordPool};
use crate::rules::{Verdict, WordValidator};

use super::used::UsedWords;

/// Fatal session-start failures.
///
/// Starting is the only fallible transition; the engine surfaces these
/// instead of substituting a fallback root word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StartError {
    /// The root word pool has no candidates to draw from.
    #[error("root word pool is empty")]
    EmptyPool,
}

/// One running game: a root word and the words accepted against it.
///
/// A session exists only in the started state. [`start`](Self::start) is
/// the constructor, so submitting before a root word exists cannot be
/// expressed. [`restart`](Self::restart) begins a fresh round in place.
///
/// Sessions are plain values: run multiple concurrent games by holding
/// multiple sessions, each owning its own root word, used words, and RNG
/// stream.
///
/// ## Example
///
/// ```
/// use scramble::lexicon::{AcceptAll, WordPool};
/// use scramble::rules::Verdict;
/// use scramble::session::SessionBuilder;
///
/// let pool = WordPool::parse("silkworm\n");
/// let mut session = SessionBuilder::new()
///     .seed(42)
///     .start(&pool, AcceptAll)
///     .unwrap();
///
/// assert_eq!(session.root_word().as_str(), "silkworm");
/// assert_eq!(session.submit(" Wok "), Some(Verdict::Accepted));
/// assert_eq!(session.submit("wok"), Some(Verdict::AlreadyUsed));
/// assert_eq!(session.submit("   "), None); // nothing was submitted
/// ```
#[derive(Clone)]
pub struct GameSession<C: SpellChecker> {
    config: GameConfig,
    checker: C,
    rng: GameRng,
    root: Word,
    used: UsedWords,
    last_verdict: Option<Verdict>,
}

impl<C: SpellChecker> GameSession<C> {
    /// Start a session with explicit configuration and RNG.
    ///
    /// Draws the root word uniformly from `pool` and begins the round
    /// with no used words and no verdict.
    ///
    /// # Errors
    ///
    /// [`StartError::EmptyPool`] if `pool` has no candidates.
    pub fn start(
        pool: &WordPool,
        checker: C,
        config: GameConfig,
        mut rng: GameRng,
    ) -> Result<Self, StartError> {
        let root = pool
            .choose(&mut rng)
            .cloned()
            .ok_or(StartError::EmptyPool)?;
        debug!(root = %root, pool_size = pool.len(), "session started");

        Ok(Self {
            config,
            checker,
            rng,
            root,
            used: UsedWords::new(),
            last_verdict: None,
        })
    }

    /// Begin a fresh round: new root word, cleared used words.
    ///
    /// Draws from the session's own RNG stream, so a seeded session's
    /// sequence of roots is reproducible across restarts. On failure the
    /// session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`StartError::EmptyPool`] if `pool` has no candidates.
    pub fn restart(&mut self, pool: &WordPool) -> Result<&Word, StartError> {
        let root = pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or(StartError::EmptyPool)?;
        debug!(root = %root, pool_size = pool.len(), "session restarted");

        self.root = root;
        self.used.clear();
        self.last_verdict = None;
        Ok(&self.root)
    }

    /// Submit one raw answer.
    ///
    /// The input is normalized first (trimmed, lowercased). If nothing
    /// remains, `None` comes back and the session is untouched: nothing
    /// was submitted. Otherwise exactly one [`Verdict`] is produced; on
    /// [`Verdict::Accepted`] the word is recorded at the front of the
    /// used list. Rejections change nothing but
    /// [`last_verdict`](Self::last_verdict).
    pub fn submit(&mut self, raw: &str) -> Option<Verdict> {
        let candidate = Word::normalize(raw)?;

        let verdict = WordValidator::new(&self.checker, &self.config)
            .validate(&candidate, &self.root, &self.used);
        trace!(candidate = %candidate, ?verdict, "submission validated");

        if verdict.is_accepted() {
            self.used.record(candidate);
        }
        self.last_verdict = Some(verdict);
        Some(verdict)
    }

    /// The current root word.
    #[must_use]
    pub fn root_word(&self) -> &Word {
        &self.root
    }

    /// The words accepted so far, newest first.
    #[must_use]
    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    /// The verdict of the most recent real submission.
    ///
    /// `None` until the first non-empty submission of the round.
    /// Empty-input no-ops never overwrite it.
    #[must_use]
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Builder for creating a [`GameSession`].
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: GameConfig,
    seed: Option<u64>,
}

impl SessionBuilder {
    /// Create a builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session configuration.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the session RNG for deterministic root word selection.
    ///
    /// Unseeded sessions draw a seed from the operating system.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start the session: draw a root word from `pool` using the
    /// configured seed and the injected oracle.
    ///
    /// # Errors
    ///
    /// [`StartError::EmptyPool`] if `pool` has no candidates.
    pub fn start<C: SpellChecker>(
        self,
        pool: &WordPool,
        checker: C,
    ) -> Result<GameSession<C>, StartError> {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        GameSession::start(pool, checker, self.config, rng)
    }
}
