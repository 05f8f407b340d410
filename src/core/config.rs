//! Game configuration types.
//!
//! Hosts configure the engine at session start by providing a `GameConfig`.
//! The engine never hardcodes limits or language assumptions - the defaults
//! here match the classic game, and hosts override them per session.

use serde::{Deserialize, Serialize};

/// Minimum letter count applied when none is configured.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Language tag handed to the spell-check oracle when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimum letter count for an accepted word (default: 3).
    /// Shorter submissions are rejected before any other rule runs.
    pub min_word_len: usize,

    /// Language tag passed to the spell-check oracle (default: "en").
    /// The engine treats it as opaque; the oracle decides what it means.
    pub language: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom minimum word length.
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Create a new config with a custom language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_word_len, 3);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::default()
            .with_min_word_len(4)
            .with_language("de");

        assert_eq!(config.min_word_len, 4);
        assert_eq!(config.language, "de");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GameConfig::default().with_language("fr");
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
