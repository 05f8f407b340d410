//! # scramble
//!
//! An anagram word game engine: draw a root word, then accept or reject
//! the words players build from its letters.
//!
//! ## Design Principles
//!
//! 1. **Engine, Not App**: No UI, no file I/O, no platform dictionary.
//!    Hosts load word lists and inject a spell-check oracle; the engine
//!    owns the rules.
//!
//! 2. **One Verdict Per Submission**: Rules run in a fixed priority order
//!    and short-circuit, so every non-empty submission maps to exactly
//!    one `Verdict`.
//!
//! 3. **Deterministic By Construction**: Root word selection runs through
//!    a seeded RNG, so any session can be replayed exactly under test.
//!
//! ## Architecture
//!
//! - **Normalize Once**: Raw input becomes a `Word` (trimmed, lowercase)
//!   at the boundary; everything past it compares with plain `==`.
//!
//! - **Persistent Data Structures**: O(1) cloning of session state via
//!   `im-rs`, so hosts can snapshot freely.
//!
//! - **Injected Capabilities**: Dictionary membership lives behind the
//!   `SpellChecker` trait; closures implement it directly.
//!
//! ## Modules
//!
//! - `core`: Normalized words, letter multisets, RNG, configuration
//! - `lexicon`: Root word pool and the spell-check oracle boundary
//! - `rules`: The validation rule chain and its verdicts
//! - `session`: Game session lifecycle and accepted-word tracking

pub mod core;
pub mod lexicon;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, LetterPool, Word};

pub use crate::lexicon::{AcceptAll, DenyAll, SpellChecker, WordListChecker, WordPool};

pub use crate::rules::{Feedback, Verdict, WordValidator};

pub use crate::session::{GameSession, SessionBuilder, StartError, UsedWords};
