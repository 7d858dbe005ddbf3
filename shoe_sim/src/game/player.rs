use crate::stats::PlayerStats;
use shoe_lib::{resolve, Card, Hand, Resolution};
use std::fmt::Display;

/// Struct for a simulated player. A player holds a hand for the current round only,
/// and keeps a tally of every hand it has been settled on.
#[derive(Debug, Clone)]
pub struct PlayerSim {
    seat: usize,
    hand: Hand,
    stats: PlayerStats,
}

impl PlayerSim {
    /// Associated function to create a new `PlayerSim` struct sitting at `seat` (zero based).
    pub fn new(seat: usize) -> PlayerSim {
        PlayerSim {
            seat,
            hand: Hand::new(),
            stats: PlayerStats::new(),
        }
    }

    /// Method to receive a card, updates the state of the player's current hand
    pub fn receive_card(&mut self, card: Card) {
        self.hand.receive_card(card);
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Settles the current hand against the dealer's total and records the outcome.
    pub fn settle(&mut self, dealer_total: u8) -> Resolution {
        let resolution = resolve(self.hand.value(), dealer_total);
        self.stats.record(resolution.outcome());
        resolution
    }

    /// Method to reset the player's hand after a complete round
    pub fn reset(&mut self) {
        self.hand.reset();
    }

    /// Clears both the hand and every recorded statistic
    pub fn reset_stats(&mut self) {
        self.hand.reset();
        self.stats.reset();
    }
}

impl Display for PlayerSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {} had {} = {}",
            self.seat + 1,
            self.hand,
            self.hand.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoe_lib::{Outcome, Rank, Suit};

    #[test]
    fn test_settle_records_outcome() {
        let mut player = PlayerSim::new(0);
        player.receive_card(Card::new(Suit::Hearts, Rank::King));
        player.receive_card(Card::new(Suit::Clubs, Rank::Nine));
        let resolution = player.settle(18);
        assert_eq!(resolution.outcome(), Outcome::Win);
        assert_eq!(player.stats().wins(), 1);
        assert_eq!(player.stats().hands_played(), 1);
        assert_eq!(player.to_string(), "Player 1 had K♥ 9♣ = 19");
    }

    #[test]
    fn test_reset_keeps_stats() {
        let mut player = PlayerSim::new(2);
        player.receive_card(Card::new(Suit::Hearts, Rank::Two));
        player.receive_card(Card::new(Suit::Clubs, Rank::Three));
        player.settle(20);
        player.reset();
        assert!(player.hand().is_empty());
        assert_eq!(player.stats().losses(), 1);
        player.reset_stats();
        assert_eq!(player.stats().hands_played(), 0);
    }
}
