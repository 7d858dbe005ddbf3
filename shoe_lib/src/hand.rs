use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Totals a hand of blackjack.
///
/// Every ace starts out counted as 11. Only once the total is over 21 are aces
/// softened, one at a time, by counting them as 1 instead, until the hand is no
/// longer over 21 or there are no aces left to soften.
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate(cards).0
}

/// Returns the total of the hand along with the number of aces that are still counted as 11.
fn evaluate(cards: &[Card]) -> (u8, u8) {
    let mut total: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value() as u16;
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (u8::try_from(total).unwrap_or(u8::MAX), aces)
}

/// Checks if the hand holds at least one ace that is still being counted as 11
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate(cards).1 > 0
}

pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// The cards dealt to a single seat, or to the dealer, for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Associated function to create a new empty `Hand`.
    pub fn new() -> Self {
        Hand { cards: Vec::with_capacity(2) }
    }

    /// Method for receiving a card, changes the state of the `Hand` instance
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Method to clear the hand so it can be reused for the next round
    pub fn reset(&mut self) {
        self.cards.clear();
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", formatted)
    }
}
