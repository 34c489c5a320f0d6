//! Achievement badges.
//!
//! Each badge is a pure predicate over a [`ProgressSnapshot`]. Unlocking is
//! monotone: once a badge is in the session's set it is never re-evaluated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::session::SessionState;

/// Read-only view of aggregate progress used by badge predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub xp: u64,
    pub streak: u32,
    pub mastered_count: usize,
    pub deck_size: usize,
}

impl ProgressSnapshot {
    pub fn capture(state: &SessionState, catalog: &Catalog) -> Self {
        Self {
            xp: state.xp,
            streak: state.streak,
            mastered_count: catalog.mastered_count(&state.deck),
            deck_size: state.deck.len(),
        }
    }
}

/// The built-in badges, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "spark-3")]
    SparkStreak,
    #[serde(rename = "laser-7")]
    LaserFocus,
    #[serde(rename = "xp-250")]
    XpHunter,
    #[serde(rename = "deck-master")]
    DeckMaster,
}

impl Badge {
    pub const ALL: [Badge; 4] = [
        Badge::SparkStreak,
        Badge::LaserFocus,
        Badge::XpHunter,
        Badge::DeckMaster,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Badge::SparkStreak => "spark-3",
            Badge::LaserFocus => "laser-7",
            Badge::XpHunter => "xp-250",
            Badge::DeckMaster => "deck-master",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::SparkStreak => "Spark Streak: hit 3 in a row",
            Badge::LaserFocus => "Laser Focus: hit 7 streak",
            Badge::XpHunter => "XP Hunter: reach 250 XP",
            Badge::DeckMaster => "Deck Master: master all cards",
        }
    }

    pub fn test(&self, snapshot: &ProgressSnapshot) -> bool {
        match self {
            Badge::SparkStreak => snapshot.streak >= 3,
            Badge::LaserFocus => snapshot.streak >= 7,
            Badge::XpHunter => snapshot.xp >= 250,
            Badge::DeckMaster => snapshot.mastered_count == snapshot.deck_size,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unlock every badge whose predicate now holds.
///
/// Returns the newly unlocked badges in declaration order; badges already in
/// `state.badges` are skipped.
pub fn evaluate(state: &mut SessionState, catalog: &Catalog) -> Vec<Badge> {
    let snapshot = ProgressSnapshot::capture(state, catalog);
    let mut unlocked = Vec::new();

    for badge in Badge::ALL {
        if !state.badges.contains(&badge) && badge.test(&snapshot) {
            state.badges.insert(badge);
            tracing::info!(badge = badge.key(), "badge unlocked");
            unlocked.push(badge);
        }
    }

    unlocked
}
