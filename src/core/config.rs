//! Game configuration.
//!
//! Only card counts and hazard kinds are configurable. Everything else about
//! the rules is fixed. The configuration is plain data so the CLI can load it
//! from JSON and override individual fields from flags.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{DeckBuilder, HazardKind};

/// Default number of rounds in a session.
pub const DEFAULT_ROUNDS: u32 = 5;

/// Rule configuration for a whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpeditionConfig {
    /// Smallest treasure card value (inclusive).
    pub treasure_min: u32,

    /// Largest treasure card value (inclusive).
    pub treasure_max: u32,

    /// Hazard kinds in the deck, in display order.
    pub hazard_kinds: Vec<HazardKind>,

    /// Copies of each hazard kind per deck.
    pub hazard_copies_per_kind: u32,

    /// Rounds per session.
    pub rounds: u32,

    /// Fixed seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for ExpeditionConfig {
    fn default() -> Self {
        Self {
            treasure_min: 1,
            treasure_max: 23,
            hazard_kinds: HazardKind::standard_set(),
            hazard_copies_per_kind: 4,
            rounds: DEFAULT_ROUNDS,
            seed: None,
        }
    }
}

impl ExpeditionConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the config. Called before any round is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        self.deck_builder().validate()
    }

    /// Deck builder for these card counts.
    #[must_use]
    pub fn deck_builder(&self) -> DeckBuilder {
        DeckBuilder::new(
            self.treasure_min..=self.treasure_max,
            self.hazard_kinds.clone(),
            self.hazard_copies_per_kind,
        )
    }
}
