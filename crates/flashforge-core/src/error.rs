//! Engine error types.
//!
//! These represent failures inside the progression engine itself. File and
//! configuration problems are reported through `anyhow` at the edges.

use thiserror::Error;

/// Errors that can occur while building or driving a review session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The grade label is not one of `again`, `hard`, `good`, `easy`.
    #[error("unrecognized grade: {0}")]
    UnrecognizedGrade(String),

    /// A card id has no mastery record. Indicates the deck and the record
    /// container went out of sync.
    #[error("unknown card id: {0}")]
    UnknownCardId(String),

    /// A catalog must contain at least one card.
    #[error("deck has no cards")]
    EmptyDeck,

    /// Two cards in the same catalog share an id.
    #[error("duplicate card id: {0}")]
    DuplicateCardId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            EngineError::UnknownCardId("c9".into()).to_string(),
            "unknown card id: c9"
        );
        assert_eq!(EngineError::EmptyDeck.to_string(), "deck has no cards");
    }
}
