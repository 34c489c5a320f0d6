//! Card store: the immutable card catalog plus its mastery records.
//!
//! A `Catalog` is passed explicitly to every operation that reads or writes
//! mastery, so independent sessions never share state.

use std::collections::{HashMap, HashSet};

use crate::error::EngineError;
use crate::model::{Deck, Flashcard, MasteryRecord};

/// The cards of one deck and a mastery record for each of them.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: String,
    name: String,
    cards: Vec<Flashcard>,
    records: HashMap<String, MasteryRecord>,
}

impl Catalog {
    /// Build a catalog with a fresh record for every card.
    pub fn new(deck: Deck) -> Result<Self, EngineError> {
        if deck.cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }

        let mut ids = HashSet::new();
        for card in &deck.cards {
            if !ids.insert(card.id.as_str()) {
                return Err(EngineError::DuplicateCardId(card.id.clone()));
            }
        }

        let mut catalog = Self {
            id: deck.id,
            name: deck.name,
            cards: deck.cards,
            records: HashMap::new(),
        };
        catalog.reset_records();
        Ok(catalog)
    }

    /// Reinitialize every record to `seen = 0, mastery = 0`.
    pub fn reset_records(&mut self) {
        self.records = self
            .cards
            .iter()
            .map(|c| (c.id.clone(), MasteryRecord::default()))
            .collect();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a catalog position.
    pub fn card(&self, position: usize) -> Option<&Flashcard> {
        self.cards.get(position)
    }

    pub fn record(&self, card_id: &str) -> Result<&MasteryRecord, EngineError> {
        self.records
            .get(card_id)
            .ok_or_else(|| EngineError::UnknownCardId(card_id.to_string()))
    }

    pub fn record_mut(&mut self, card_id: &str) -> Result<&mut MasteryRecord, EngineError> {
        self.records
            .get_mut(card_id)
            .ok_or_else(|| EngineError::UnknownCardId(card_id.to_string()))
    }

    /// The card at `position` together with its mutable record.
    pub fn entry_mut(
        &mut self,
        position: usize,
    ) -> Result<(&Flashcard, &mut MasteryRecord), EngineError> {
        let card = self
            .cards
            .get(position)
            .ok_or_else(|| EngineError::UnknownCardId(format!("#{position}")))?;
        let record = self
            .records
            .get_mut(&card.id)
            .ok_or_else(|| EngineError::UnknownCardId(card.id.clone()))?;
        Ok((card, record))
    }

    /// Number of cards in `deck` (catalog positions) at or above the mastery
    /// threshold. Positions without a record are not counted.
    pub fn mastered_count(&self, deck: &[usize]) -> usize {
        deck.iter()
            .filter_map(|&pos| self.cards.get(pos))
            .filter_map(|card| self.records.get(&card.id))
            .filter(|record| record.is_mastered())
            .count()
    }
}
