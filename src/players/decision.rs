//! Decision sources: where a player's continue/retreat choice comes from.
//!
//! Sources are trait-based so the round never needs to know who is choosing:
//! - `HumanSource`: blocks on an injected prompt callback
//! - `ComputerSource`: risk heuristic plus one random draw
//! - `AlwaysContinue`: never turns back

use serde::Serialize;
use tracing::trace;

use super::heuristic::{Assessment, RiskHeuristic};
use super::ledger::PlayerKind;
use crate::core::{GameRng, PlayerId};
use crate::round::RoundSnapshot;

/// A player's answer for one choice phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Continue,
    Retreat,
}

/// Supplies choices for one seat.
///
/// `round` is the snapshot taken at the start of the choice phase, so every
/// active player sees the same state regardless of query order.
pub trait DecisionSource {
    fn decide(&mut self, round: &RoundSnapshot, me: PlayerId, rng: &mut GameRng) -> Choice;

    fn kind(&self) -> PlayerKind;
}

/// Human player driven by a synchronous prompt.
///
/// The callback may block (e.g. on stdin); from the round's point of view it
/// is an ordinary call.
pub struct HumanSource<F> {
    prompt: F,
}

impl<F> HumanSource<F>
where
    F: FnMut(&RoundSnapshot, PlayerId) -> Choice,
{
    pub fn new(prompt: F) -> Self {
        Self { prompt }
    }
}

impl<F> DecisionSource for HumanSource<F>
where
    F: FnMut(&RoundSnapshot, PlayerId) -> Choice,
{
    fn decide(&mut self, round: &RoundSnapshot, me: PlayerId, _rng: &mut GameRng) -> Choice {
        (self.prompt)(round, me)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

/// Computer player using `RiskHeuristic`.
///
/// At departure the path is empty, so the heuristic would always find
/// nothing to gain. A computer always sets out instead.
#[derive(Clone, Debug, Default)]
pub struct ComputerSource {
    heuristic: RiskHeuristic,
}

impl ComputerSource {
    #[must_use]
    pub fn new(heuristic: RiskHeuristic) -> Self {
        Self { heuristic }
    }
}

impl DecisionSource for ComputerSource {
    fn decide(&mut self, round: &RoundSnapshot, me: PlayerId, rng: &mut GameRng) -> Choice {
        if round.opened_cards.is_empty() {
            trace!(round = round.round_number, %me, "departure, setting out");
            return Choice::Continue;
        }
        match self.heuristic.assess(round, me) {
            Assessment::NothingToGain => {
                trace!(round = round.round_number, %me, "nothing left to gain, retreating");
                Choice::Retreat
            }
            Assessment::Score(score) => {
                let roll = rng.roll_percent();
                let choice = if roll < score {
                    Choice::Retreat
                } else {
                    Choice::Continue
                };
                trace!(round = round.round_number, %me, score, roll, ?choice, "risk assessed");
                choice
            }
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

/// Computer that always keeps exploring.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysContinue;

impl DecisionSource for AlwaysContinue {
    fn decide(&mut self, _round: &RoundSnapshot, _me: PlayerId, _rng: &mut GameRng) -> Choice {
        Choice::Continue
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
