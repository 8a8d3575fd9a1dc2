//! Round observers.
//!
//! Presentation hooks. The core calls them but never depends on what they do.

use super::snapshot::RoundSnapshot;
use super::state::RoundResult;
use crate::core::PlayerId;
use crate::players::Choice;

/// Receives round events. Every method defaults to doing nothing.
pub trait RoundObserver {
    fn on_round_start(&mut self, _round_number: u32) {}

    /// Choices of one phase, in roster order.
    fn on_choices(&mut self, _round_number: u32, _choices: &[(PlayerId, Choice)]) {}

    /// State after a card was revealed.
    fn on_reveal(&mut self, _snapshot: &RoundSnapshot) {}

    fn on_round_end(&mut self, _result: &RoundResult) {}
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Collects every post-reveal snapshot and round result.
#[derive(Clone, Debug, Default)]
pub struct SnapshotLog {
    pub snapshots: Vec<RoundSnapshot>,
    pub results: Vec<RoundResult>,
    pub choices: Vec<(u32, PlayerId, Choice)>,
}

impl RoundObserver for SnapshotLog {
    fn on_choices(&mut self, round_number: u32, choices: &[(PlayerId, Choice)]) {
        self.choices
            .extend(choices.iter().map(|&(p, c)| (round_number, p, c)));
    }

    fn on_reveal(&mut self, snapshot: &RoundSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_round_end(&mut self, result: &RoundResult) {
        self.results.push(result.clone());
    }
}
