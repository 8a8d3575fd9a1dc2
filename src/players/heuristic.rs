//! Computer risk heuristic.
//!
//! ```text
//! score = hazards^3 + acquired + 3 * surplus - 10
//!       - (top > stored + acquired           ? round^2 : 0)
//!       - (top > stored + acquired + surplus ? round^2 : 0)
//! ```
//!
//! A uniform roll in `[0, 100)` below the score means retreat. The score is
//! unbounded: anything at or above 100 always retreats, anything at or below
//! 0 always continues. Trailing the leader lowers the score, so players who
//! are behind push their luck harder as the session goes on.

use crate::core::PlayerId;
use crate::round::RoundSnapshot;

/// Weight of gems still lying on the path.
pub const SURPLUS_WEIGHT: i64 = 3;

/// Flat offset subtracted from every score.
pub const RETREAT_BIAS: i64 = 10;

/// Everything the score is computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RiskInputs {
    /// Hazards revealed this round, over all kinds.
    pub hazard_count: u32,
    pub acquired: u32,
    /// Surplus summed over opened treasures.
    pub surplus: u32,
    pub stored: u32,
    /// Highest stored total in the roster.
    pub top_stored: u32,
    pub round_number: u32,
}

impl RiskInputs {
    /// Read the inputs for `me` from a choice-phase snapshot.
    #[must_use]
    pub fn from_snapshot(round: &RoundSnapshot, me: PlayerId) -> Self {
        let own = round.player(me);
        Self {
            hazard_count: round.hazards_revealed(),
            acquired: own.acquired_total,
            surplus: round.surplus_on_path(),
            stored: own.stored_total,
            top_stored: round.top_stored(),
            round_number: round.round_number,
        }
    }
}

/// Result of assessing a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assessment {
    /// Nothing in hand and nothing on the path: always retreat.
    NothingToGain,
    /// Retreat if a percent roll lands below this.
    Score(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskHeuristic {
    pub surplus_weight: i64,
    pub retreat_bias: i64,
}

impl Default for RiskHeuristic {
    fn default() -> Self {
        Self {
            surplus_weight: SURPLUS_WEIGHT,
            retreat_bias: RETREAT_BIAS,
        }
    }
}

impl RiskHeuristic {
    #[must_use]
    pub fn assess(&self, round: &RoundSnapshot, me: PlayerId) -> Assessment {
        self.assess_inputs(&RiskInputs::from_snapshot(round, me))
    }

    #[must_use]
    pub fn assess_inputs(&self, inputs: &RiskInputs) -> Assessment {
        if inputs.acquired + inputs.surplus == 0 {
            Assessment::NothingToGain
        } else {
            Assessment::Score(self.score(inputs))
        }
    }

    /// Raw score, without the nothing-to-gain check.
    #[must_use]
    pub fn score(&self, inputs: &RiskInputs) -> i64 {
        let hazards = i64::from(inputs.hazard_count);
        let acquired = i64::from(inputs.acquired);
        let surplus = i64::from(inputs.surplus);
        let stored = i64::from(inputs.stored);
        let top = i64::from(inputs.top_stored);
        let round_penalty = i64::from(inputs.round_number).pow(2);

        let mut score = hazards.pow(3) + acquired + self.surplus_weight * surplus - self.retreat_bias;
        if top > stored + acquired {
            score -= round_penalty;
        }
        if top > stored + acquired + surplus {
            score -= round_penalty;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RiskInputs {
        RiskInputs {
            hazard_count: 2,
            acquired: 6,
            surplus: 3,
            stored: 10,
            top_stored: 10,
            round_number: 3,
        }
    }

    #[test]
    fn test_score_leader() {
        // 8 + 6 + 9 - 10
        assert_eq!(RiskHeuristic::default().score(&inputs()), 13);
    }

    #[test]
    fn test_score_trailing_once() {
        // behind once acquired is counted, ahead once surplus is
        let trailing = RiskInputs {
            top_stored: 18,
            ..inputs()
        };
        assert_eq!(RiskHeuristic::default().score(&trailing), 13 - 9);
    }

    #[test]
    fn test_score_trailing_twice() {
        let trailing = RiskInputs {
            top_stored: 40,
            ..inputs()
        };
        assert_eq!(RiskHeuristic::default().score(&trailing), 13 - 18);
    }

    #[test]
    fn test_hazards_dominate() {
        let risky = RiskInputs {
            hazard_count: 5,
            ..inputs()
        };
        assert!(RiskHeuristic::default().score(&risky) >= 100);
    }

    #[test]
    fn test_nothing_to_gain() {
        let empty = RiskInputs {
            hazard_count: 4,
            acquired: 0,
            surplus: 0,
            ..inputs()
        };
        assert_eq!(RiskHeuristic::default().assess_inputs(&empty), Assessment::NothingToGain);
        assert_eq!(
            RiskHeuristic::default().assess_inputs(&inputs()),
            Assessment::Score(13)
        );
    }

    #[test]
    fn test_custom_weights() {
        let cautious = RiskHeuristic {
            surplus_weight: 0,
            retreat_bias: 0,
        };
        assert_eq!(cautious.score(&inputs()), 14);
    }
}
