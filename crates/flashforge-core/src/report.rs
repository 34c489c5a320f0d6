//! End-of-run session summary with JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::session::SessionState;
use crate::statistics::{category_breakdown, level_from_xp, progress_percent, CategoryStats};

/// A snapshot of a review run, suitable for printing or exporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique summary identifier.
    pub id: Uuid,
    /// When the summary was taken.
    pub created_at: DateTime<Utc>,
    pub deck: DeckSummary,
    pub xp: u64,
    pub level: u64,
    pub streak: u32,
    pub best_streak: u32,
    pub mastered: usize,
    pub progress_percent: u32,
    /// Unlocked badges, in declaration order.
    pub badges: Vec<BadgeSummary>,
    /// Per-card progress, in current review order.
    pub cards: Vec<CardProgress>,
    pub categories: Vec<CategoryStats>,
}

/// Summary of a deck (without the card contents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSummary {
    pub id: String,
    pub name: String,
    pub card_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeSummary {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardProgress {
    pub id: String,
    pub category: String,
    pub seen: u32,
    pub mastery: u32,
    pub mastered: bool,
}

impl SessionSummary {
    pub fn capture(catalog: &Catalog, state: &SessionState, now: DateTime<Utc>) -> Self {
        let mastered = catalog.mastered_count(&state.deck);

        let cards = state
            .deck
            .iter()
            .filter_map(|&pos| catalog.card(pos))
            .filter_map(|card| {
                catalog.record(&card.id).ok().map(|record| CardProgress {
                    id: card.id.clone(),
                    category: card.category.clone(),
                    seen: record.seen,
                    mastery: record.mastery,
                    mastered: record.is_mastered(),
                })
            })
            .collect();

        let badges = state
            .badges
            .iter()
            .map(|b| BadgeSummary {
                key: b.key().to_string(),
                label: b.label().to_string(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: now,
            deck: DeckSummary {
                id: catalog.id().to_string(),
                name: catalog.name().to_string(),
                card_count: catalog.len(),
            },
            xp: state.xp,
            level: level_from_xp(state.xp),
            streak: state.streak,
            best_streak: state.best_streak,
            mastered,
            progress_percent: progress_percent(mastered, state.deck.len()),
            badges,
            cards,
            categories: category_breakdown(catalog, &state.deck),
        }
    }

    /// Save the summary as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize summary")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        Ok(())
    }

    /// Load a summary from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read summary from {}", path.display()))?;
        let summary: SessionSummary =
            serde_json::from_str(&content).context("failed to parse summary JSON")?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::Badge;
    use crate::catalog::tests::deck_of;

    fn sample() -> SessionSummary {
        let mut catalog = Catalog::new(deck_of(&["a", "b"])).unwrap();
        catalog.record_mut("b").unwrap().mastery = 6;
        catalog.record_mut("b").unwrap().seen = 2;
        let mut state = SessionState::new(2, DateTime::<Utc>::UNIX_EPOCH);
        state.deck = vec![1, 0];
        state.xp = 130;
        state.streak = 3;
        state.best_streak = 4;
        state.badges.insert(Badge::SparkStreak);
        SessionSummary::capture(&catalog, &state, DateTime::<Utc>::UNIX_EPOCH)
    }

    #[test]
    fn capture_reflects_state() {
        let summary = sample();
        assert_eq!(summary.deck.card_count, 2);
        assert_eq!(summary.level, 2);
        assert_eq!(summary.mastered, 1);
        assert_eq!(summary.progress_percent, 50);
        assert_eq!(summary.cards[0].id, "b");
        assert!(summary.cards[0].mastered);
        assert_eq!(summary.badges.len(), 1);
        assert_eq!(summary.badges[0].key, "spark-3");
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/summary.json");
        let summary = sample();
        summary.save_json(&path).unwrap();

        let loaded = SessionSummary::load_json(&path).unwrap();
        assert_eq!(loaded.id, summary.id);
        assert_eq!(loaded.xp, 130);
        assert_eq!(loaded.categories, summary.categories);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(SessionSummary::load_json(Path::new("no/such/summary.json")).is_err());
    }
}
