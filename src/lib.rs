//! # gem-expedition
//!
//! A push-your-luck expedition card game engine.
//!
//! Players walk a shared path of treasure and hazard cards. Before every
//! reveal each one either keeps exploring or heads back to camp with what
//! they carry. Treasure is split evenly among whoever is on the path, and
//! remainders stay on the card for later retreaters. The second hazard of a
//! kind in one round wipes out everyone still exploring.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Rounds never reach for globals. Players, decision
//!    sources and the RNG are passed into every step.
//!
//! 2. **Deterministic**: One seeded `GameRng` drives the shuffle and every
//!    computer decision, so a seed reproduces a whole session.
//!
//! 3. **Presentation Agnostic**: The core emits `RoundSnapshot`s to a
//!    `RoundObserver` and never formats anything itself.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player maps, RNG, configuration, errors
//! - `cards`: Treasure and hazard cards, deck construction
//! - `rules`: Treasure settlement and hazard resolution
//! - `players`: Ledgers, decision sources, computer heuristic
//! - `round`: Round state machine, snapshots, observers
//! - `game`: Multi-round sessions and standings
//!
//! ## Example
//!
//! ```
//! use gem_expedition::{GameBuilder, NoopObserver};
//!
//! let mut game = GameBuilder::new()
//!     .computer("Computer 1")
//!     .computer("Computer 2")
//!     .rounds(3)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let summary = game.play(&mut NoopObserver).unwrap();
//! assert_eq!(summary.rounds.len(), 3);
//! assert!(!summary.winners.is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod players;
pub mod round;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    ExpeditionConfig,
    ConfigError, RoundError,
};

pub use crate::cards::{Card, DeckBuilder, HazardCard, HazardKind, TreasureCard};

pub use crate::rules::{distribute, resolve, HazardCounts, HazardOutcome, Settlement, DUPLICATE_HAZARD_THRESHOLD};

pub use crate::players::{
    AlwaysContinue, Choice, ComputerSource, DecisionSource, HumanSource,
    Player, PlayerKind, PlayerStatus,
    RiskHeuristic, RiskInputs, Assessment,
};

pub use crate::round::{
    Round, RoundEnd, RoundPhase, RoundResult,
    RoundSnapshot, PlayerSnapshot,
    RoundObserver, NoopObserver, SnapshotLog,
};

pub use crate::game::{Game, GameBuilder, GameSummary, Standing};
