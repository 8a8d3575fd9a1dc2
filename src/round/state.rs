//! One play-through of a shuffled deck.
//!
//! ## Phases
//!
//! ```text
//! Setup -> Choice -> Settlement -> Reveal -> Choice -> ... -> Terminal
//! ```
//!
//! - **Choice**: every active player answers from one shared snapshot.
//! - **Settlement**: retreaters split leftover surplus, bank, and leave.
//! - **Reveal**: the next card is drawn and applied to whoever remains.
//!
//! Roster order is the iteration order of every phase, so a fixed seed
//! gives a fixed round.
//!
//! Players, decision sources and the RNG are not owned by the round. They
//! are passed into each step, and the round only holds card and hazard state.

use std::collections::VecDeque;

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::observer::RoundObserver;
use super::snapshot::{PlayerSnapshot, RoundSnapshot};
use crate::cards::{Card, HazardKind};
use crate::core::{GameRng, PlayerId, PlayerMap, RoundError};
use crate::players::{Choice, DecisionSource, Player, PlayerStatus};
use crate::rules::{distribute, resolve, HazardCounts, HazardOutcome};

/// Seat groups within one phase; rosters are small.
type Group = SmallVec<[PlayerId; 8]>;

/// Round state-machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Created, not yet set up.
    Setup,
    Choice,
    Settlement,
    Reveal,
    Terminal,
}

/// Why a round ended. These are normal game outcomes, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEnd {
    /// Every player went back to camp.
    AllRetreated,
    /// A hazard kind came up twice.
    HazardWipe(HazardKind),
    /// The path ran out; survivors went home with their haul.
    DeckExhausted,
}

/// Ledgers reported back to the game at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub number: u32,
    pub end: RoundEnd,
    /// Gems each seat banked this round.
    pub banked: PlayerMap<u32>,
    /// Session totals after this round.
    pub stored_totals: PlayerMap<u32>,
    pub cards_revealed: usize,
}

/// A single round.
#[derive(Clone, Debug)]
pub struct Round {
    number: u32,
    stacked: VecDeque<Card>,
    opened: Vector<Card>,
    hazard_counts: HazardCounts,
    active: Vec<PlayerId>,
    phase: RoundPhase,
    end: Option<RoundEnd>,
}

impl Round {
    /// Create round `number` (1-based) tracking the given hazard kinds.
    pub fn new(number: u32, hazard_kinds: &[HazardKind]) -> Self {
        Self {
            number,
            stacked: VecDeque::new(),
            opened: Vector::new(),
            hazard_counts: HazardCounts::new(hazard_kinds),
            active: Vec::new(),
            phase: RoundPhase::Setup,
            end: None,
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn end(&self) -> Option<&RoundEnd> {
        self.end.as_ref()
    }

    #[must_use]
    pub fn opened_cards(&self) -> &Vector<Card> {
        &self.opened
    }

    #[must_use]
    pub fn stacked_cards(&self) -> &VecDeque<Card> {
        &self.stacked
    }

    #[must_use]
    pub fn hazard_counts(&self) -> &HazardCounts {
        &self.hazard_counts
    }

    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Seat the whole roster and lay out `deck` (front = next to reveal).
    ///
    /// A finished round may be set up again; it starts from scratch.
    pub fn setup(&mut self, players: &mut PlayerMap<Player>, deck: Vec<Card>) {
        for (_, player) in players.iter_mut() {
            player.begin_round();
        }
        self.active = players.player_ids().collect();
        self.stacked = deck.into();
        self.opened = Vector::new();
        self.hazard_counts.reset();
        self.end = None;
        self.phase = RoundPhase::Choice;
    }

    /// Run the round to its end.
    pub fn start(
        &mut self,
        players: &mut PlayerMap<Player>,
        sources: &mut PlayerMap<Box<dyn DecisionSource>>,
        rng: &mut GameRng,
        observer: &mut dyn RoundObserver,
    ) -> Result<RoundResult, RoundError> {
        self.expect_phase(RoundPhase::Choice)?;
        info!(round = self.number, players = self.active.len(), cards = self.stacked.len(), "round start");
        observer.on_round_start(self.number);

        let end = loop {
            let choices = self.choice_phase(players, sources, rng)?;
            observer.on_choices(self.number, &choices);

            if let Some(end) = self.settlement_phase(players)? {
                break end;
            }

            let end = self.reveal_phase(players)?;
            if end != Some(RoundEnd::DeckExhausted) {
                observer.on_reveal(&self.snapshot(players));
            }
            if let Some(end) = end {
                break end;
            }
        };

        let result = self.result(players, end);
        info!(round = self.number, end = ?result.end, revealed = result.cards_revealed, "round end");
        observer.on_round_end(&result);
        Ok(result)
    }

    /// Ask every active player for a choice, all from one snapshot.
    ///
    /// Departure (nothing revealed yet) is an ordinary choice phase: a
    /// player may head straight back and bank nothing.
    pub fn choice_phase(
        &mut self,
        players: &mut PlayerMap<Player>,
        sources: &mut PlayerMap<Box<dyn DecisionSource>>,
        rng: &mut GameRng,
    ) -> Result<SmallVec<[(PlayerId, Choice); 8]>, RoundError> {
        self.expect_phase(RoundPhase::Choice)?;
        if sources.player_count() != players.player_count() {
            // first seat not covered by both maps
            let seat = sources.player_count().min(players.player_count());
            return Err(RoundError::RosterMismatch {
                player: PlayerId::new(seat as u8),
                roster_size: players.player_count(),
            });
        }

        let view = self.snapshot(players);
        let choices: SmallVec<[(PlayerId, Choice); 8]> = self
            .active
            .iter()
            .map(|&p| (p, sources[p].decide(&view, p, rng)))
            .collect();

        for &(player, choice) in &choices {
            players[player].record_choice(choice);
            debug!(round = self.number, %player, ?choice, "choice");
        }

        self.phase = RoundPhase::Settlement;
        Ok(choices)
    }

    /// Send retreaters home. Returns the end reason if nobody is left.
    pub fn settlement_phase(
        &mut self,
        players: &mut PlayerMap<Player>,
    ) -> Result<Option<RoundEnd>, RoundError> {
        self.expect_phase(RoundPhase::Settlement)?;
        debug_assert!(self.active.iter().all(|&p| players[p].status().is_exploring()));

        let (retreating, continuing): (Group, Group) = self
            .active
            .iter()
            .copied()
            .partition(|&p| players[p].status() == PlayerStatus::Retreating);

        if !retreating.is_empty() {
            self.return_to_camp(&retreating, players)?;
        }
        self.active = continuing.into_vec();

        if self.active.is_empty() {
            return Ok(Some(self.finish(RoundEnd::AllRetreated)));
        }
        self.phase = RoundPhase::Reveal;
        Ok(None)
    }

    /// Reveal the next card. Returns the end reason if the round is over.
    pub fn reveal_phase(
        &mut self,
        players: &mut PlayerMap<Player>,
    ) -> Result<Option<RoundEnd>, RoundError> {
        self.expect_phase(RoundPhase::Reveal)?;

        let Some(mut card) = self.stacked.pop_front() else {
            let survivors: Group = self.active.drain(..).collect();
            self.return_to_camp(&survivors, players)?;
            return Ok(Some(self.finish(RoundEnd::DeckExhausted)));
        };
        debug!(round = self.number, card = %card.label(), "opened");

        let applied = match &mut card {
            Card::Treasure(treasure) => distribute(treasure, &self.active, players).map(|_| None),
            Card::Hazard(hazard) => resolve(hazard, &mut self.hazard_counts, &mut self.active, players)
                .map(|outcome| match outcome {
                    HazardOutcome::Wipe { kind, .. } => Some(RoundEnd::HazardWipe(kind)),
                    HazardOutcome::Survived { .. } => None,
                }),
        };
        // the drawn card stays on the path even when applying it failed
        self.opened.push_back(card);

        match applied {
            Ok(Some(end)) => Ok(Some(self.finish(end))),
            Ok(None) => {
                self.phase = RoundPhase::Choice;
                Ok(None)
            }
            Err(e) => {
                // aborted: terminal without an end reason
                self.phase = RoundPhase::Terminal;
                Err(e)
            }
        }
    }

    /// Snapshot of the current state for `players`.
    #[must_use]
    pub fn snapshot(&self, players: &PlayerMap<Player>) -> RoundSnapshot {
        RoundSnapshot {
            round_number: self.number,
            phase: self.phase,
            opened_cards: self.opened.clone(),
            hazard_counts: self
                .hazard_counts
                .iter()
                .map(|(k, c)| (k.clone(), c))
                .collect(),
            active_players: self.active.clone(),
            remaining_cards: self.stacked.len(),
            players: players.map(|_, p| PlayerSnapshot {
                name: p.name().to_string(),
                kind: p.kind(),
                acquired_total: p.acquired_total(),
                stored_total: p.stored_total(),
                status: p.status(),
            }),
        }
    }

    /// Settle leftover surplus among `group`, then bank each member.
    fn return_to_camp(
        &mut self,
        group: &[PlayerId],
        players: &mut PlayerMap<Player>,
    ) -> Result<(), RoundError> {
        if group.is_empty() {
            return Ok(());
        }
        for card in self.opened.iter_mut() {
            if let Card::Treasure(treasure) = card {
                if treasure.has_surplus() {
                    distribute(treasure, group, players)?;
                }
            }
        }
        for &player in group {
            let banked = players[player].bank();
            debug!(round = self.number, %player, banked, "back at camp");
        }
        Ok(())
    }

    fn finish(&mut self, end: RoundEnd) -> RoundEnd {
        self.phase = RoundPhase::Terminal;
        self.end = Some(end.clone());
        end
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::PhaseOrder {
                expected,
                found: self.phase,
            })
        }
    }

    fn result(&self, players: &PlayerMap<Player>, end: RoundEnd) -> RoundResult {
        RoundResult {
            number: self.number,
            end,
            banked: players.map(|_, p| p.stored_history().last().copied().unwrap_or(0)),
            stored_totals: players.map(|_, p| p.stored_total()),
            cards_revealed: self.opened.len(),
        }
    }
}
