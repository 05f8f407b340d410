//! Word lists: the root word pool and the spell-check oracle.
//!
//! The engine owns no files and no platform dictionary. Hosts load
//! word-list bytes and hand the text to `WordPool::parse`; dictionary
//! membership is an injected `SpellChecker` capability.
//!
//! ## Key Types
//!
//! - `WordPool`: Candidate root words, drawn from at session start
//! - `SpellChecker`: Oracle trait, implemented by closures too
//! - `WordListChecker`: In-memory word-list oracle, one list per language
//! - `AcceptAll` / `DenyAll`: Baseline oracles for tests

pub mod pool;
pub mod spell;

pub use pool::WordPool;
pub use spell::{AcceptAll, DenyAll, SpellChecker, WordListChecker};
