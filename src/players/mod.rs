//! Players: ledgers, decision sources, and the computer heuristic.

pub mod ledger;
pub mod decision;
pub mod heuristic;

pub use ledger::{Player, PlayerKind, PlayerStatus};
pub use decision::{AlwaysContinue, Choice, ComputerSource, DecisionSource, HumanSource};
pub use heuristic::{Assessment, RiskHeuristic, RiskInputs, RETREAT_BIAS, SURPLUS_WEIGHT};
