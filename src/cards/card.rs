//! Card types.
//!
//! A card is either a treasure holding a divisible gem pool, or a hazard
//! tagged with a kind. Only a treasure's surplus ever changes, and it only
//! goes down.

use serde::{Deserialize, Serialize};

/// Hazard kind tag. Two of the same kind in one round ends it.
///
/// Kinds are configurable, so this is a name rather than a closed enum.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardKind(String);

impl HazardKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The five kinds of the standard deck.
    #[must_use]
    pub fn standard_set() -> Vec<HazardKind> {
        ["lava", "rockfall", "snake", "mummy", "spider"]
            .into_iter()
            .map(HazardKind::new)
            .collect()
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Treasure card with a gem pool shared among whoever settles it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreasureCard {
    total_gem: u32,
    surplus_gem: u32,
}

impl TreasureCard {
    /// Create a treasure holding `gems`.
    ///
    /// Panics if `gems` is zero; deck configs are validated before this is reached.
    #[must_use]
    pub fn new(gems: u32) -> Self {
        assert!(gems >= 1, "Treasure must hold at least one gem");
        Self {
            total_gem: gems,
            surplus_gem: gems,
        }
    }

    /// Gems printed on the card. Never changes.
    #[must_use]
    pub fn total_gem(&self) -> u32 {
        self.total_gem
    }

    /// Gems still lying on the card.
    #[must_use]
    pub fn surplus_gem(&self) -> u32 {
        self.surplus_gem
    }

    #[must_use]
    pub fn has_surplus(&self) -> bool {
        self.surplus_gem > 0
    }

    /// Split the surplus evenly among `recipients` and keep the remainder.
    ///
    /// Returns the per-recipient share. `recipients` must be nonzero; the
    /// settlement layer checks that before calling.
    pub(crate) fn split(&mut self, recipients: u32) -> u32 {
        debug_assert!(recipients > 0);
        let share = self.surplus_gem / recipients;
        self.surplus_gem %= recipients;
        share
    }
}

/// Hazard card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HazardCard {
    kind: HazardKind,
}

impl HazardCard {
    #[must_use]
    pub fn new(kind: HazardKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn kind(&self) -> &HazardKind {
        &self.kind
    }
}

/// A single card on the expedition path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    Treasure(TreasureCard),
    Hazard(HazardCard),
}

impl Card {
    /// Shorthand for a fresh treasure card.
    #[must_use]
    pub fn treasure(gems: u32) -> Self {
        Card::Treasure(TreasureCard::new(gems))
    }

    /// Shorthand for a hazard card.
    pub fn hazard(kind: impl Into<String>) -> Self {
        Card::Hazard(HazardCard::new(HazardKind::new(kind)))
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        matches!(self, Card::Treasure(_))
    }

    #[must_use]
    pub fn as_treasure(&self) -> Option<&TreasureCard> {
        match self {
            Card::Treasure(t) => Some(t),
            Card::Hazard(_) => None,
        }
    }

    #[must_use]
    pub fn hazard_kind(&self) -> Option<&HazardKind> {
        match self {
            Card::Hazard(h) => Some(h.kind()),
            Card::Treasure(_) => None,
        }
    }

    /// Name shown when the card is revealed.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Card::Treasure(t) => format!("{} gems", t.total_gem()),
            Card::Hazard(h) => h.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treasure_starts_full() {
        let card = TreasureCard::new(7);
        assert_eq!(card.total_gem(), 7);
        assert_eq!(card.surplus_gem(), 7);
        assert!(card.has_surplus());
    }

    #[test]
    fn test_split_keeps_remainder() {
        let mut card = TreasureCard::new(10);

        assert_eq!(card.split(3), 3);
        assert_eq!(card.surplus_gem(), 1);
        assert_eq!(card.total_gem(), 10);

        assert_eq!(card.split(2), 0);
        assert_eq!(card.surplus_gem(), 1);

        assert_eq!(card.split(1), 1);
        assert_eq!(card.surplus_gem(), 0);
        assert!(!card.has_surplus());
    }

    #[test]
    #[should_panic(expected = "at least one gem")]
    fn test_zero_gem_treasure() {
        let _ = TreasureCard::new(0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Card::treasure(5).label(), "5 gems");
        assert_eq!(Card::hazard("mummy").label(), "mummy");
    }

    #[test]
    fn test_accessors() {
        let snake = Card::hazard("snake");
        assert!(!snake.is_treasure());
        assert!(snake.as_treasure().is_none());
        assert_eq!(snake.hazard_kind(), Some(&HazardKind::new("snake")));

        let gems = Card::treasure(4);
        assert!(gems.is_treasure());
        assert_eq!(gems.as_treasure().map(TreasureCard::total_gem), Some(4));
        assert!(gems.hazard_kind().is_none());
    }

    #[test]
    fn test_card_serialization() {
        let json = serde_json::to_value(Card::treasure(3)).unwrap();
        assert_eq!(json["type"], "treasure");
        assert_eq!(json["surplus_gem"], 3);

        let json = serde_json::to_value(Card::hazard("lava")).unwrap();
        assert_eq!(json["type"], "hazard");
        assert_eq!(json["kind"], "lava");
    }
}
