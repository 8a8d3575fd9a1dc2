//! Deck construction.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;

use super::card::{Card, HazardKind};
use crate::core::{ConfigError, GameRng};

/// Builds the card sequence for a round.
///
/// One treasure per integer in `treasure_range`, plus `copies_per_kind`
/// hazards of every kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckBuilder {
    treasure_range: RangeInclusive<u32>,
    hazard_kinds: Vec<HazardKind>,
    copies_per_kind: u32,
}

impl DeckBuilder {
    pub fn new(
        treasure_range: RangeInclusive<u32>,
        hazard_kinds: Vec<HazardKind>,
        copies_per_kind: u32,
    ) -> Self {
        Self {
            treasure_range,
            hazard_kinds,
            copies_per_kind,
        }
    }

    /// Treasures 1..=23 and four copies each of the five standard hazards.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(1..=23, HazardKind::standard_set(), 4)
    }

    #[must_use]
    pub fn hazard_kinds(&self) -> &[HazardKind] {
        &self.hazard_kinds
    }

    /// Number of cards `build` produces.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.treasure_range.clone().count() + self.hazard_kinds.len() * self.copies_per_kind as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.treasure_range.is_empty() {
            return Err(ConfigError::EmptyTreasureRange {
                min: *self.treasure_range.start(),
                max: *self.treasure_range.end(),
            });
        }
        if *self.treasure_range.start() == 0 {
            return Err(ConfigError::ZeroGemTreasure);
        }
        if self.hazard_kinds.is_empty() {
            return Err(ConfigError::NoHazardKinds);
        }

        let mut seen = FxHashSet::default();
        for kind in &self.hazard_kinds {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateHazardKind(kind.clone()));
            }
        }
        Ok(())
    }

    /// Cards in construction order: treasures ascending, then hazards kind by kind.
    #[must_use]
    pub fn build_ordered(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        cards.extend(self.treasure_range.clone().map(Card::treasure));

        for kind in &self.hazard_kinds {
            for _ in 0..self.copies_per_kind {
                cards.push(Card::hazard(kind.name()));
            }
        }
        cards
    }

    /// Cards in uniformly shuffled order.
    pub fn build(&self, rng: &mut GameRng) -> Vec<Card> {
        let mut cards = self.build_ordered();
        rng.shuffle(&mut cards);
        cards
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::standard()
    }
}
