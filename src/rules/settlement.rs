//! Treasure settlement.
//!
//! A settlement splits a treasure's surplus evenly among one recipient
//! group. The remainder stays on the card, so a card opened earlier in the
//! round can be settled again by a later, smaller retreat group.

use tracing::debug;

use crate::cards::TreasureCard;
use crate::core::{PlayerId, PlayerMap, RoundError};
use crate::players::Player;

/// Record of one settlement event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Gems credited to each recipient.
    pub share: u32,
    pub recipients: u32,
    /// Surplus left on the card afterwards.
    pub remainder: u32,
}

impl Settlement {
    /// Gems that left the card in this settlement.
    #[must_use]
    pub fn distributed(&self) -> u32 {
        self.share * self.recipients
    }
}

/// Split `card`'s surplus among `recipients`, crediting each one.
///
/// Every recipient is credited, even a zero share. An empty recipient set
/// or a seat outside the roster is a contract violation.
pub fn distribute(
    card: &mut TreasureCard,
    recipients: &[PlayerId],
    players: &mut PlayerMap<Player>,
) -> Result<Settlement, RoundError> {
    if recipients.is_empty() {
        return Err(RoundError::EmptyRecipients);
    }
    let roster_size = players.player_count();
    if let Some(&player) = recipients.iter().find(|p| p.index() >= roster_size) {
        return Err(RoundError::RosterMismatch { player, roster_size });
    }

    let count = recipients.len() as u32;
    let share = card.split(count);
    for &player in recipients {
        players[player].credit(share);
    }

    debug!(
        card = card.total_gem(),
        share,
        recipients = count,
        remainder = card.surplus_gem(),
        "treasure settled"
    );

    Ok(Settlement {
        share,
        recipients: count,
        remainder: card.surplus_gem(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::PlayerKind;

    fn roster(n: usize) -> PlayerMap<Player> {
        PlayerMap::new(n, |p| Player::new(format!("P{}", p.0), PlayerKind::Computer))
    }

    #[test]
    fn test_even_split() {
        let mut players = roster(2);
        let mut card = TreasureCard::new(10);
        let ids: Vec<_> = players.player_ids().collect();

        let settlement = distribute(&mut card, &ids, &mut players).unwrap();

        assert_eq!(settlement, Settlement { share: 5, recipients: 2, remainder: 0 });
        assert_eq!(players[PlayerId::new(0)].acquired_total(), 5);
        assert_eq!(players[PlayerId::new(1)].acquired_total(), 5);
    }

    #[test]
    fn test_remainder_then_lone_retreat() {
        let mut players = roster(3);
        let mut card = TreasureCard::new(10);
        let ids: Vec<_> = players.player_ids().collect();

        let first = distribute(&mut card, &ids, &mut players).unwrap();
        assert_eq!(first.share, 3);
        assert_eq!(card.surplus_gem(), 1);

        let lone = [PlayerId::new(2)];
        let second = distribute(&mut card, &lone, &mut players).unwrap();
        assert_eq!(second.share, 1);
        assert_eq!(card.surplus_gem(), 0);
        assert_eq!(players[PlayerId::new(2)].acquired_history(), &[3, 1]);
        assert_eq!(players[PlayerId::new(0)].acquired_history(), &[3]);
    }

    #[test]
    fn test_zero_share_still_credited() {
        let mut players = roster(4);
        let mut card = TreasureCard::new(3);
        let ids: Vec<_> = players.player_ids().collect();

        let settlement = distribute(&mut card, &ids, &mut players).unwrap();

        assert_eq!(settlement.share, 0);
        assert_eq!(settlement.distributed(), 0);
        assert_eq!(card.surplus_gem(), 3);
        for player in players.values() {
            assert_eq!(player.acquired_history(), &[0]);
        }
    }

    #[test]
    fn test_empty_recipients_rejected() {
        let mut players = roster(2);
        let mut card = TreasureCard::new(6);

        assert_eq!(
            distribute(&mut card, &[], &mut players),
            Err(RoundError::EmptyRecipients)
        );
        assert_eq!(card.surplus_gem(), 6);
    }

    #[test]
    fn test_unknown_seat_rejected() {
        let mut players = roster(2);
        let mut card = TreasureCard::new(6);

        let err = distribute(&mut card, &[PlayerId::new(0), PlayerId::new(5)], &mut players).unwrap_err();
        assert_eq!(
            err,
            RoundError::RosterMismatch { player: PlayerId::new(5), roster_size: 2 }
        );
        assert_eq!(card.surplus_gem(), 6);
        assert!(players[PlayerId::new(0)].acquired_history().is_empty());
    }
}
