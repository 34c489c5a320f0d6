//! TOML deck parser.
//!
//! Loads decks from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Deck, Flashcard};

/// Intermediate TOML structure for parsing deck files.
#[derive(Debug, Deserialize)]
struct TomlDeckFile {
    deck: TomlDeckHeader,
    #[serde(default)]
    cards: Vec<TomlCard>,
}

#[derive(Debug, Deserialize)]
struct TomlDeckHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCard {
    id: String,
    #[serde(default = "default_category")]
    category: String,
    prompt: String,
    answer: String,
}

fn default_category() -> String {
    "General".to_string()
}

/// Parse a single TOML file into a `Deck`.
pub fn parse_deck(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;

    parse_deck_str(&content, path)
}

/// Parse a TOML string into a `Deck`.
pub fn parse_deck_str(content: &str, source_path: &Path) -> Result<Deck> {
    let parsed: TomlDeckFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let cards = parsed
        .cards
        .into_iter()
        .map(|c| Flashcard {
            id: c.id.trim().to_string(),
            category: c.category.trim().to_string(),
            prompt: c.prompt.trim().to_string(),
            answer: c.answer.trim().to_string(),
        })
        .collect();

    Ok(Deck {
        id: parsed.deck.id,
        name: parsed.deck.name,
        description: parsed.deck.description,
        cards,
    })
}

/// Recursively load all `.toml` deck files from a directory.
pub fn load_deck_directory(dir: &Path) -> Result<Vec<Deck>> {
    let mut decks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            decks.extend(load_deck_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_deck(&path) {
                Ok(deck) => decks.push(deck),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(decks)
}

/// A warning from deck validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The card ID (if applicable).
    pub card_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a deck for common issues.
pub fn validate_deck(deck: &Deck) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if deck.cards.is_empty() {
        warnings.push(ValidationWarning {
            card_id: None,
            message: "deck has no cards".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for card in &deck.cards {
        if card.id.is_empty() {
            warnings.push(ValidationWarning {
                card_id: None,
                message: "card with empty id".into(),
            });
        } else if !seen_ids.insert(&card.id) {
            warnings.push(ValidationWarning {
                card_id: Some(card.id.clone()),
                message: format!("duplicate card ID: {}", card.id),
            });
        }
    }

    for card in &deck.cards {
        for (field, value) in [
            ("prompt", &card.prompt),
            ("answer", &card.answer),
            ("category", &card.category),
        ] {
            if value.is_empty() {
                warnings.push(ValidationWarning {
                    card_id: Some(card.id.clone()),
                    message: format!("{field} is empty"),
                });
            }
        }
    }

    warnings
}
