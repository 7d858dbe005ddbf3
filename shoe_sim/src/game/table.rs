use crate::game::player::PlayerSim;
use crate::SimulationError;
use rand_chacha::ChaCha8Rng;
use shoe_lib::{Card, Hand, Shoe};

/// Struct for a simulated blackjack table. The table is the only thing that touches the shoe:
/// it decides when the shoe gets rebuilt and deals every card of a round from it.
pub struct BlackjackTableSim {
    shoe: Shoe,
    rng: ChaCha8Rng,
    pub dealers_hand: Hand,
    num_seats: usize,
    pub num_reshuffles: u64,
}

impl BlackjackTableSim {
    /// Associated function to create a new table with a freshly built shoe. `num_players` does not
    /// include the dealer.
    pub fn new(num_decks: usize, num_players: usize, mut rng: ChaCha8Rng) -> Self {
        let shoe = Shoe::new(num_decks, &mut rng);
        BlackjackTableSim {
            shoe,
            rng,
            dealers_hand: Hand::new(),
            num_seats: num_players + 1,
            num_reshuffles: 0,
        }
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Rebuilds the shoe from full decks with a new marker.
    pub fn reshuffle(&mut self) {
        self.shoe.rebuild(&mut self.rng);
        self.num_reshuffles += 1;
    }

    /// Starts over with a fresh shoe. This rebuild is not counted as a reshuffle, and the count
    /// starts again from zero.
    pub fn reset_shoe(&mut self) {
        self.shoe.rebuild(&mut self.rng);
        self.num_reshuffles = 0;
    }

    /// Makes sure every seat, dealer included, can be given two cards. Rebuilds the shoe when
    /// it is running low, or when a spent shoe was left over. Returns whether a rebuild happened.
    pub fn prepare_round(&mut self) -> bool {
        if self.shoe.is_exhausted() || !self.shoe.can_deal_round(self.num_seats) {
            log::debug!(
                "not enough cards in the shoe ({} left), reshuffling",
                self.shoe.cards_remaining()
            );
            self.reshuffle();
            return true;
        }
        false
    }

    fn next_card(&mut self) -> Result<Card, SimulationError> {
        self.shoe.deal_card().ok_or(SimulationError::EmptyShoe)
    }

    /// Deals two cards to each player in seat order, then two to the dealer.
    /// Returns whether the marker came up while dealing.
    pub fn deal_hand(&mut self, players: &mut [PlayerSim]) -> Result<bool, SimulationError> {
        for player in players.iter_mut() {
            for _ in 0..2 {
                let card = self.next_card()?;
                player.receive_card(card);
            }
        }

        for _ in 0..2 {
            let card = self.next_card()?;
            self.dealers_hand.receive_card(card);
        }

        Ok(self.shoe.is_exhausted())
    }

    /// Rebuilds the shoe if the marker came up during the round. Returns whether a rebuild happened.
    pub fn finish_hand(&mut self) -> bool {
        if self.shoe.is_exhausted() {
            log::debug!("marker card appeared, reshuffling");
            self.reshuffle();
            return true;
        }
        false
    }

    /// Method to reset the table after a complete hand
    pub fn reset(&mut self) {
        self.dealers_hand.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn table(num_decks: usize, num_players: usize) -> BlackjackTableSim {
        BlackjackTableSim::new(num_decks, num_players, ChaCha8Rng::seed_from_u64(17))
    }

    #[test]
    fn test_deal_hand() {
        let mut table = table(1, 3);
        let mut players: Vec<PlayerSim> = (0..3).map(PlayerSim::new).collect();
        table.deal_hand(&mut players).unwrap();
        for player in &players {
            assert_eq!(player.hand().len(), 2);
        }
        assert_eq!(table.dealers_hand.len(), 2);
        assert_eq!(table.shoe().cards_remaining(), 52 - 8);
    }

    #[test]
    fn test_deal_order() {
        let mut table = table(2, 2);
        let upcoming: Vec<Card> = table
            .shoe()
            .iter()
            .filter_map(|item| match item {
                shoe_lib::DealtItem::Card(c) => Some(*c),
                shoe_lib::DealtItem::Marker => None,
            })
            .take(6)
            .collect();
        let mut players: Vec<PlayerSim> = (0..2).map(PlayerSim::new).collect();
        table.deal_hand(&mut players).unwrap();
        assert_eq!(players[0].hand().cards(), &upcoming[0..2]);
        assert_eq!(players[1].hand().cards(), &upcoming[2..4]);
        assert_eq!(table.dealers_hand.cards(), &upcoming[4..6]);
    }

    #[test]
    fn test_prepare_round_rebuilds_low_shoe() {
        let mut table = table(1, 7);
        // drain the shoe down to fewer than 16 cards
        while table.shoe.cards_remaining() >= 16 {
            table.shoe.deal_card();
        }
        assert!(table.prepare_round());
        assert_eq!(table.shoe().cards_remaining(), 52);
        assert_eq!(table.num_reshuffles, 1);
        assert!(!table.prepare_round());
    }

    #[test]
    fn test_reset_shoe_clears_reshuffle_count() {
        let mut table = table(1, 2);
        table.reshuffle();
        table.reshuffle();
        assert_eq!(table.num_reshuffles, 2);
        table.shoe.deal_card();
        table.reset_shoe();
        assert_eq!(table.num_reshuffles, 0);
        assert_eq!(table.shoe().cards_remaining(), 52);
    }

    #[test]
    fn test_marker_triggers_reshuffle_after_round() {
        let mut table = table(1, 1);
        let mut players = vec![PlayerSim::new(0)];
        let mut rounds = 0;
        loop {
            assert!(!table.prepare_round());
            let marker = table.deal_hand(&mut players).unwrap();
            for player in players.iter_mut() {
                assert_eq!(player.hand().len(), 2);
                player.reset();
            }
            assert_eq!(table.dealers_hand.len(), 2);
            table.reset();
            rounds += 1;
            if marker {
                assert!(table.finish_hand());
                assert_eq!(table.shoe().cards_remaining(), 52);
                break;
            }
            assert!(!table.finish_hand());
        }
        assert!(rounds >= 5);
    }
}
