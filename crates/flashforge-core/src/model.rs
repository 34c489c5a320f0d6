//! Core data model types for flashforge.
//!
//! These are the value types shared by the catalog, the scoring engine and
//! the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Mastery level at which a card counts as mastered.
pub const MASTERY_THRESHOLD: u32 = 6;

/// A single flashcard. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Unique identifier within a deck.
    pub id: String,
    /// Topic label shown alongside the card.
    pub category: String,
    /// The question side.
    pub prompt: String,
    /// The answer side.
    pub answer: String,
}

/// A named, ordered collection of flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Unique identifier for this deck.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this deck.
    #[serde(default)]
    pub description: String,
    /// The cards, in catalog order.
    #[serde(default)]
    pub cards: Vec<Flashcard>,
}

/// Per-card review progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRecord {
    /// Number of grading events on this card.
    pub seen: u32,
    /// Current mastery level, never below zero.
    pub mastery: u32,
}

impl MasteryRecord {
    pub fn is_mastered(&self) -> bool {
        self.mastery >= MASTERY_THRESHOLD
    }
}

/// Self-assessed recall quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
}

impl Grade {
    /// All grades, weakest first.
    pub const ALL: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

    /// The lowercase label used in input and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Again => "again",
            Grade::Hard => "hard",
            Grade::Good => "good",
            Grade::Easy => "easy",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(Grade::Again),
            "hard" => Ok(Grade::Hard),
            "good" => Ok(Grade::Good),
            "easy" => Ok(Grade::Easy),
            _ => Err(EngineError::UnrecognizedGrade(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_display_and_parse() {
        assert_eq!(Grade::Good.to_string(), "good");
        assert_eq!("again".parse::<Grade>().unwrap(), Grade::Again);
        assert_eq!("easy".parse::<Grade>().unwrap(), Grade::Easy);
        assert_eq!(
            "perfect".parse::<Grade>(),
            Err(EngineError::UnrecognizedGrade("perfect".into()))
        );
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn grade_labels_are_exact() {
        for label in ["EASY", "Hard", " good ", "again\n"] {
            assert_eq!(
                label.parse::<Grade>(),
                Err(EngineError::UnrecognizedGrade(label.into()))
            );
        }
    }

    #[test]
    fn mastery_record_default_is_fresh() {
        let record = MasteryRecord::default();
        assert_eq!(record.seen, 0);
        assert_eq!(record.mastery, 0);
        assert!(!record.is_mastered());
    }

    #[test]
    fn mastered_at_threshold() {
        let record = MasteryRecord {
            seen: 2,
            mastery: MASTERY_THRESHOLD,
        };
        assert!(record.is_mastered());
    }

    #[test]
    fn deck_serde_defaults() {
        let json = r#"{"id":"d","name":"D"}"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        assert!(deck.cards.is_empty());
        assert!(deck.description.is_empty());
    }
}
