use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The four suits of a standard deck, in the order they are laid out when a deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Returns the symbol used when displaying a card of this suit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

/// The thirteen ranks of a standard deck, ordered from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The raw blackjack value of the rank. Aces count as 11 here, callers
    /// that total a hand are responsible for softening them.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single playing card. Cards are plain values and never change once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Associated function to create a new `Card`.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// Returns 10 for face cards, 11 for an ace and the numeric rank otherwise.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Returns an iterator over a single 52 card deck, suit by suit with ranks in ascending order.
pub fn deck() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
}

/// Builds `num_decks` full decks concatenated one after the other, unshuffled.
pub fn decks(num_decks: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks * 52);
    for _ in 0..num_decks {
        cards.extend(deck());
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_card_values() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Two).value(), 2);
        assert_eq!(Card::new(Suit::Clubs, Rank::Ten).value(), 10);
        assert_eq!(Card::new(Suit::Spades, Rank::Jack).value(), 10);
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).value(), 10);
        assert_eq!(Card::new(Suit::Diamonds, Rank::King).value(), 10);
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ace).value(), 11);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Clubs, Rank::Seven).to_string(), "7♣");
    }

    #[test]
    fn test_single_deck_is_complete() {
        let cards: Vec<Card> = deck().collect();
        assert_eq!(cards.len(), 52);
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(cards[0], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(cards[51], Card::new(Suit::Spades, Rank::Ace));
    }

    #[test]
    fn test_multiple_decks() {
        let cards = decks(6);
        assert_eq!(cards.len(), 6 * 52);
        let aces = cards.iter().filter(|c| c.is_ace()).count();
        assert_eq!(aces, 6 * 4);
        let total: u32 = cards.iter().map(|c| c.value() as u32).sum();
        // 4 * (2 + ... + 9) + 4 * 4 * 10 + 4 * 11 per deck
        assert_eq!(total, 6 * (4 * 44 + 160 + 44));
    }
}
