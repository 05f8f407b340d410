//! Core engine types: normalized words, letter multisets, RNG, configuration.
//!
//! This module contains the fundamental building blocks the rule chain and
//! session are assembled from. Hosts tune behavior via `GameConfig` rather
//! than modifying the core.

pub mod word;
pub mod letters;
pub mod rng;
pub mod config;

pub use word::Word;
pub use letters::LetterPool;
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_LANGUAGE, DEFAULT_MIN_WORD_LEN};
