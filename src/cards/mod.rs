//! Cards and deck construction.
//!
//! - `Card`: treasure or hazard, as a tagged enum
//! - `DeckBuilder`: produces the shuffled sequence for one round

pub mod card;
pub mod deck;

pub use card::{Card, HazardCard, HazardKind, TreasureCard};
pub use deck::DeckBuilder;
