//! Hazard resolution.
//!
//! Each reveal bumps its kind's count. The second occurrence of a kind in a
//! round incapacitates everyone still on the path.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::cards::{HazardCard, HazardKind};
use crate::core::{PlayerId, PlayerMap, RoundError};
use crate::players::Player;

/// Occurrences of one kind that end the round.
pub const DUPLICATE_HAZARD_THRESHOLD: u32 = 2;

/// Per-kind hazard counts for one round.
///
/// Keeps the configured kind order for display; lookups go through the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardCounts {
    order: Vec<HazardKind>,
    counts: FxHashMap<HazardKind, u32>,
}

impl HazardCounts {
    /// Every kind starts at zero.
    pub fn new(kinds: &[HazardKind]) -> Self {
        Self {
            order: kinds.to_vec(),
            counts: kinds.iter().map(|k| (k.clone(), 0)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, kind: &HazardKind) -> Option<u32> {
        self.counts.get(kind).copied()
    }

    /// Hazards revealed so far, over all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// (kind, count) pairs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&HazardKind, u32)> + '_ {
        self.order
            .iter()
            .map(move |k| (k, self.counts.get(k).copied().unwrap_or(0)))
    }

    pub fn reset(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    /// Bump `kind` and return its new count.
    pub fn record(&mut self, kind: &HazardKind) -> Result<u32, RoundError> {
        let count = self
            .counts
            .get_mut(kind)
            .ok_or_else(|| RoundError::UnknownHazardKind(kind.clone()))?;
        *count += 1;
        Ok(*count)
    }
}

/// What a hazard reveal did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HazardOutcome {
    /// First sighting (or a count past the threshold); nobody hurt.
    Survived { kind: HazardKind, count: u32 },
    /// Duplicate: these players were incapacitated.
    Wipe { kind: HazardKind, victims: Vec<PlayerId> },
}

impl HazardOutcome {
    #[must_use]
    pub fn is_wipe(&self) -> bool {
        matches!(self, HazardOutcome::Wipe { .. })
    }
}

/// Apply a revealed hazard.
///
/// On the duplicate, every active player banks zero for the round and
/// `active` is emptied.
pub fn resolve(
    card: &HazardCard,
    counts: &mut HazardCounts,
    active: &mut Vec<PlayerId>,
    players: &mut PlayerMap<Player>,
) -> Result<HazardOutcome, RoundError> {
    let kind = card.kind().clone();
    let count = counts.record(&kind)?;

    if count != DUPLICATE_HAZARD_THRESHOLD {
        debug!(%kind, count, "hazard revealed");
        return Ok(HazardOutcome::Survived { kind, count });
    }

    let victims = std::mem::take(active);
    for &player in &victims {
        let lost = players[player].incapacitate();
        debug!(%player, lost, "incapacitated");
    }
    info!(%kind, victims = victims.len(), "duplicate hazard");

    Ok(HazardOutcome::Wipe { kind, victims })
}
