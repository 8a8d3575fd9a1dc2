//! Read-only round snapshots.
//!
//! A snapshot is taken at the start of every choice phase to give all
//! decision sources the same view. Another is taken after every reveal for
//! presentation. Opened cards live in an `im::Vector`, so taking a snapshot
//! shares structure with the round instead of copying the path.

use im::Vector;
use serde::Serialize;

use super::state::RoundPhase;
use crate::cards::{Card, HazardKind};
use crate::core::{PlayerId, PlayerMap};
use crate::players::{PlayerKind, PlayerStatus};

/// One seat as seen in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub kind: PlayerKind,
    /// Gems in hand this round.
    pub acquired_total: u32,
    /// Gems banked over the whole session.
    pub stored_total: u32,
    pub status: PlayerStatus,
}

/// Round state as visible to players and presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub round_number: u32,
    pub phase: RoundPhase,
    pub opened_cards: Vector<Card>,
    /// Counts in configured kind order.
    pub hazard_counts: Vec<(HazardKind, u32)>,
    pub active_players: Vec<PlayerId>,
    /// Cards still face down.
    pub remaining_cards: usize,
    pub players: PlayerMap<PlayerSnapshot>,
}

impl RoundSnapshot {
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerSnapshot {
        &self.players[id]
    }

    /// Hazards revealed this round, over all kinds.
    #[must_use]
    pub fn hazards_revealed(&self) -> u32 {
        self.hazard_counts.iter().map(|(_, c)| c).sum()
    }

    #[must_use]
    pub fn hazard_count(&self, kind: &HazardKind) -> u32 {
        self.hazard_counts
            .iter()
            .find(|(k, _)| k == kind)
            .map_or(0, |(_, c)| *c)
    }

    /// Gems left lying on opened treasures.
    #[must_use]
    pub fn surplus_on_path(&self) -> u32 {
        self.opened_cards
            .iter()
            .filter_map(Card::as_treasure)
            .map(|t| t.surplus_gem())
            .sum()
    }

    /// Highest banked total across the roster.
    #[must_use]
    pub fn top_stored(&self) -> u32 {
        self.players
            .values()
            .map(|p| p.stored_total)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        self.active_players.contains(&id)
    }

    /// The path as `[surplus]` / `[kind]` cells, oldest first.
    #[must_use]
    pub fn path_line(&self) -> String {
        self.opened_cards
            .iter()
            .map(|card| match card {
                Card::Treasure(t) => format!("[{}]", t.surplus_gem()),
                Card::Hazard(h) => format!("[{}]", h.kind()),
            })
            .collect()
    }
}
