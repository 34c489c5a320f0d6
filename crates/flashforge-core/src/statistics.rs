//! Derived progress statistics: level, completion, per-category breakdown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// XP needed per level.
pub const XP_PER_LEVEL: u64 = 100;

/// Level for a given XP total. Level 1 starts at zero XP.
pub fn level_from_xp(xp: u64) -> u64 {
    xp / XP_PER_LEVEL + 1
}

/// `mastered / total` as a whole percent, rounded half up.
pub fn progress_percent(mastered: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((mastered * 200 + total) / (total * 2)) as u32
}

/// Progress within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    /// Cards in this category.
    pub cards: usize,
    /// Cards at or above the mastery threshold.
    pub mastered: usize,
    /// Total grading events across the category.
    pub reviews: u32,
}

/// Per-category statistics over the cards in `deck`, sorted by category.
pub fn category_breakdown(catalog: &Catalog, deck: &[usize]) -> Vec<CategoryStats> {
    let mut by_category: BTreeMap<&str, CategoryStats> = BTreeMap::new();

    for card in deck.iter().filter_map(|&pos| catalog.card(pos)) {
        let entry = by_category
            .entry(card.category.as_str())
            .or_insert_with(|| CategoryStats {
                category: card.category.clone(),
                cards: 0,
                mastered: 0,
                reviews: 0,
            });
        entry.cards += 1;
        if let Ok(record) = catalog.record(&card.id) {
            entry.reviews += record.seen;
            if record.is_mastered() {
                entry.mastered += 1;
            }
        }
    }

    by_category.into_values().collect()
}
