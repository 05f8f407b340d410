//! Game session state: root word, used words, verdict tracking.
//!
//! A session is a value type. Hold one per concurrent game; cloning is
//! cheap because the accepted-word list is persistent.

pub mod game;
pub mod used;

pub use game::{GameSession, SessionBuilder, StartError};
pub use used::UsedWords;
