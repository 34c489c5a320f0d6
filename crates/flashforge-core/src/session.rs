//! Session state and deck navigation.
//!
//! The deck is a permutation of catalog positions. All counters start at
//! zero and only move through the scoring engine, the badge evaluator and
//! the navigation operations below.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::badges::Badge;

/// Mutable progress for one run.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Review order, as positions into the catalog.
    pub deck: Vec<usize>,
    /// Cursor into `deck`.
    pub index: usize,
    /// Total experience points.
    pub xp: u64,
    /// Current run of non-`again` grades, weighted by streak deltas.
    pub streak: u32,
    /// Highest streak reached this run.
    pub best_streak: u32,
    /// Unlocked badges.
    pub badges: BTreeSet<Badge>,
    /// When the current card became visible.
    pub answered_at: DateTime<Utc>,
}

impl SessionState {
    /// Fresh state over a catalog of `card_count` cards, in catalog order.
    pub fn new(card_count: usize, now: DateTime<Utc>) -> Self {
        Self {
            deck: (0..card_count).collect(),
            index: 0,
            xp: 0,
            streak: 0,
            best_streak: 0,
            badges: BTreeSet::new(),
            answered_at: now,
        }
    }

    /// Catalog position of the card under the cursor.
    pub fn current_position(&self) -> Option<usize> {
        self.deck.get(self.index).copied()
    }

    /// Move the cursor by `delta`, wrapping in both directions.
    pub fn advance(&mut self, delta: i64) {
        let len = self.deck.len() as i64;
        if len == 0 {
            return;
        }
        self.index = (self.index as i64 + delta).rem_euclid(len) as usize;
    }

    /// Uniformly permute the deck and move the cursor to the front.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.deck.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.deck.swap(i, j);
        }
        self.index = 0;
    }

    /// Clear all counters and badges and restore catalog order.
    ///
    /// Mastery records live in the catalog and are reset separately.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(self.deck.len(), now);
    }
}
