//! Per-player gem ledger and round status.
//!
//! A player carries two histories:
//! - `stored_history`: one entry per finished round, append-only
//! - `acquired_history`: every gem credit of the current round
//!
//! The acquired history is cleared at round setup and once more when the
//! player leaves the path (retreat or incapacitation).

use serde::Serialize;
use smallvec::SmallVec;

use super::decision::Choice;

/// Who supplies a player's choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// Lifecycle status within a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// Round set up, no choice made yet.
    #[default]
    Undecided,
    /// Chose to keep exploring this phase.
    Continuing,
    /// Chose to head back this phase; not yet settled.
    Retreating,
    /// Back at camp with gems banked.
    Retreated,
    /// Caught by a duplicate hazard; round haul lost.
    Incapacitated,
}

impl PlayerStatus {
    /// Still on the path this round.
    #[must_use]
    pub fn is_exploring(self) -> bool {
        matches!(
            self,
            PlayerStatus::Undecided | PlayerStatus::Continuing | PlayerStatus::Retreating
        )
    }
}

/// One seat's ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    stored_history: Vec<u32>,
    acquired_history: SmallVec<[u32; 16]>,
    status: PlayerStatus,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            stored_history: Vec::new(),
            acquired_history: SmallVec::new(),
            status: PlayerStatus::Undecided,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Per-round banked totals, oldest first.
    #[must_use]
    pub fn stored_history(&self) -> &[u32] {
        &self.stored_history
    }

    /// Gem credits received so far this round.
    #[must_use]
    pub fn acquired_history(&self) -> &[u32] {
        &self.acquired_history
    }

    /// Total banked across every finished round.
    #[must_use]
    pub fn stored_total(&self) -> u32 {
        self.stored_history.iter().sum()
    }

    /// Gems in hand this round, not yet safe.
    #[must_use]
    pub fn acquired_total(&self) -> u32 {
        self.acquired_history.iter().sum()
    }

    /// Reset for a new round.
    pub fn begin_round(&mut self) {
        self.acquired_history.clear();
        self.status = PlayerStatus::Undecided;
    }

    /// Record a share from a settlement. Zero shares are recorded too.
    pub fn credit(&mut self, gems: u32) {
        self.acquired_history.push(gems);
    }

    pub fn record_choice(&mut self, choice: Choice) {
        self.status = match choice {
            Choice::Continue => PlayerStatus::Continuing,
            Choice::Retreat => PlayerStatus::Retreating,
        };
    }

    /// Back at camp: bank the round haul. Returns the amount banked.
    pub fn bank(&mut self) -> u32 {
        let haul = self.acquired_total();
        self.stored_history.push(haul);
        self.acquired_history.clear();
        self.status = PlayerStatus::Retreated;
        haul
    }

    /// Wiped out by a hazard: bank nothing. Returns the amount lost.
    pub fn incapacitate(&mut self) -> u32 {
        let lost = self.acquired_total();
        self.stored_history.push(0);
        self.acquired_history.clear();
        self.status = PlayerStatus::Incapacitated;
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new("Computer 1", PlayerKind::Computer);
        assert_eq!(player.name(), "Computer 1");
        assert_eq!(player.kind(), PlayerKind::Computer);
        assert_eq!(player.status(), PlayerStatus::Undecided);
        assert_eq!(player.stored_total(), 0);
        assert!(player.stored_history().is_empty());
    }

    #[test]
    fn test_credit_and_bank() {
        let mut player = Player::new("Human 1", PlayerKind::Human);
        player.begin_round();
        player.credit(3);
        player.credit(0);
        player.credit(4);

        assert_eq!(player.acquired_history(), &[3, 0, 4]);
        assert_eq!(player.acquired_total(), 7);

        assert_eq!(player.bank(), 7);
        assert_eq!(player.stored_history(), &[7]);
        assert_eq!(player.acquired_total(), 0);
        assert_eq!(player.status(), PlayerStatus::Retreated);
    }

    #[test]
    fn test_incapacitate_banks_zero() {
        let mut player = Player::new("p", PlayerKind::Computer);
        player.begin_round();
        player.credit(5);
        assert_eq!(player.bank(), 5);

        player.begin_round();
        player.credit(9);
        assert_eq!(player.incapacitate(), 9);
        assert_eq!(player.stored_history(), &[5, 0]);
        assert_eq!(player.stored_total(), 5);
        assert_eq!(player.status(), PlayerStatus::Incapacitated);
    }

    #[test]
    fn test_begin_round_resets() {
        let mut player = Player::new("p", PlayerKind::Human);
        player.credit(2);
        player.record_choice(Choice::Retreat);
        assert_eq!(player.status(), PlayerStatus::Retreating);

        player.begin_round();
        assert!(player.acquired_history().is_empty());
        assert_eq!(player.status(), PlayerStatus::Undecided);
    }

    #[test]
    fn test_status_exploring() {
        assert!(PlayerStatus::Undecided.is_exploring());
        assert!(PlayerStatus::Continuing.is_exploring());
        assert!(PlayerStatus::Retreating.is_exploring());
        assert!(!PlayerStatus::Retreated.is_exploring());
        assert!(!PlayerStatus::Incapacitated.is_exploring());
    }
}
