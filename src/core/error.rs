//! Error types.
//!
//! Two families:
//! - `ConfigError`: rejected before any simulation step runs.
//! - `RoundError`: a state-machine contract was broken mid-round. The round
//!   is aborted and the error propagates to the caller.
//!
//! Normal round endings (everyone retreated, hazard wipe, deck exhausted) are
//! `RoundEnd` values, never errors.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::HazardKind;
use crate::round::RoundPhase;

/// Invalid game or deck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("{0} players requested, at most 255 are supported")]
    TooManyPlayers(usize),

    #[error("player name {0:?} is used more than once")]
    DuplicatePlayerName(String),

    #[error("a game needs at least one round")]
    NoRounds,

    #[error("at least one hazard kind is required")]
    NoHazardKinds,

    #[error("hazard kind {0} is listed more than once")]
    DuplicateHazardKind(HazardKind),

    #[error("treasure range {min}..={max} is empty")]
    EmptyTreasureRange { min: u32, max: u32 },

    #[error("treasure cards must hold at least one gem")]
    ZeroGemTreasure,

    #[error("could not read config: {0}")]
    Parse(String),
}

/// Broken round invariant. Indicates a bug, not a game outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("cannot settle a treasure against an empty recipient set")]
    EmptyRecipients,

    #[error("hazard kind {0} is not part of this round")]
    UnknownHazardKind(HazardKind),

    #[error("round step expected phase {expected:?}, found {found:?}")]
    PhaseOrder {
        expected: RoundPhase,
        found: RoundPhase,
    },

    #[error("{player} is not seated in a roster of {roster_size}")]
    RosterMismatch { player: PlayerId, roster_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::EmptyTreasureRange { min: 5, max: 2 }.to_string(),
            "treasure range 5..=2 is empty"
        );
        assert_eq!(
            ConfigError::DuplicateHazardKind(HazardKind::new("snake")).to_string(),
            "hazard kind snake is listed more than once"
        );
    }

    #[test]
    fn test_round_error_messages() {
        let err = RoundError::PhaseOrder {
            expected: RoundPhase::Choice,
            found: RoundPhase::Terminal,
        };
        assert_eq!(err.to_string(), "round step expected phase Choice, found Terminal");

        let err = RoundError::RosterMismatch {
            player: PlayerId::new(4),
            roster_size: 2,
        };
        assert_eq!(err.to_string(), "Seat 4 is not seated in a roster of 2");
    }
}
