//! Game session: a fixed roster playing a sequence of rounds.
//!
//! The session owns the roster, the decision sources and the single RNG.
//! Each round borrows them for the duration of its run.

mod session;

pub use session::{Game, GameBuilder, GameSummary, Standing};
