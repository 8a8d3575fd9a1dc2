//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on. They know
//! nothing about phases or card effects.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{ExpeditionConfig, DEFAULT_ROUNDS};
pub use error::{ConfigError, RoundError};
