//! Review engine orchestrator.
//!
//! Owns the catalog, the session state and the clock, and exposes the entry
//! points a presentation layer calls: grade, navigate, shuffle, reset. Every
//! call runs to completion before the next one starts.

use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;

use crate::badges::{self, Badge};
use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::error::EngineError;
use crate::model::{Flashcard, MasteryRecord};
use crate::report::SessionSummary;
use crate::scoring::{self, GradeOutcome};
use crate::session::SessionState;
use crate::statistics::{level_from_xp, progress_percent};

/// What a single grading call produced.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub outcome: GradeOutcome,
    /// Badges unlocked by this call, in declaration order.
    pub unlocked: Vec<Badge>,
}

/// The flashcard review engine.
pub struct ReviewEngine<C: Clock = SystemClock> {
    catalog: Catalog,
    state: SessionState,
    clock: C,
}

impl ReviewEngine<SystemClock> {
    /// Engine backed by the system clock.
    pub fn with_system_clock(catalog: Catalog) -> Self {
        Self::new(catalog, SystemClock)
    }
}

impl<C: Clock> ReviewEngine<C> {
    pub fn new(catalog: Catalog, clock: C) -> Self {
        let state = SessionState::new(catalog.len(), clock.now());
        Self {
            catalog,
            state,
            clock,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The card under the cursor.
    pub fn current_card(&self) -> Result<&Flashcard, EngineError> {
        self.state
            .current_position()
            .and_then(|pos| self.catalog.card(pos))
            .ok_or_else(|| EngineError::UnknownCardId(format!("#{}", self.state.index)))
    }

    /// Grade the current card, re-check badges, and move to the next card.
    ///
    /// An unrecognized grade returns [`GradeOutcome::NoEffect`] and leaves the
    /// session exactly as it was.
    pub fn on_grade(&mut self, grade: &str) -> Result<GradeReport, EngineError> {
        let position = self
            .state
            .current_position()
            .ok_or_else(|| EngineError::UnknownCardId(format!("#{}", self.state.index)))?;
        let now = self.clock.now();

        let outcome = {
            let (card, record) = self.catalog.entry_mut(position)?;
            scoring::grade_card(grade, card, record, &mut self.state, now)
        };

        if outcome.is_no_effect() {
            return Ok(GradeReport {
                outcome,
                unlocked: Vec::new(),
            });
        }

        let unlocked = badges::evaluate(&mut self.state, &self.catalog);
        self.on_navigate(1);

        Ok(GradeReport { outcome, unlocked })
    }

    /// Move the cursor by `delta` cards, wrapping around the deck.
    pub fn on_navigate(&mut self, delta: i64) {
        self.state.advance(delta);
        self.mark_displayed();
        tracing::debug!(index = self.state.index, delta, "navigated");
    }

    /// Randomize the review order and return to the first card.
    pub fn on_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state.shuffle(rng);
        self.mark_displayed();
        tracing::debug!(cards = self.state.deck.len(), "deck shuffled");
    }

    /// Start over: zero all counters and records, drop badges, restore
    /// catalog order.
    pub fn on_reset(&mut self) {
        self.catalog.reset_records();
        self.state.reset(self.clock.now());
        tracing::info!(deck = self.catalog.id(), "progress reset");
    }

    /// Restart the speed-bonus timer for the current card.
    pub fn mark_displayed(&mut self) {
        self.state.answered_at = self.clock.now();
    }

    pub fn xp(&self) -> u64 {
        self.state.xp
    }

    pub fn level(&self) -> u64 {
        level_from_xp(self.state.xp)
    }

    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.state.best_streak
    }

    pub fn mastered_count(&self) -> usize {
        self.catalog.mastered_count(&self.state.deck)
    }

    pub fn deck_len(&self) -> usize {
        self.state.deck.len()
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn badges(&self) -> &BTreeSet<Badge> {
        &self.state.badges
    }

    pub fn record(&self, card_id: &str) -> Result<&MasteryRecord, EngineError> {
        self.catalog.record(card_id)
    }

    /// Share of the deck that is mastered, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        progress_percent(self.mastered_count(), self.deck_len())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::capture(&self.catalog, &self.state, self.clock.now())
    }
}
