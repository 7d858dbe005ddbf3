//! Property-based tests for the shoe and the hand rules.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shoe_lib::{hand_value, resolve, Card, DealtItem, Outcome, Rank, Resolution, Shoe, Suit};

fn card_strategy() -> impl Strategy<Value = Card> {
    (0..4usize, 0..13usize).prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
}

fn hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..12)
}

/// Best total by brute force: try every number of aces counted as 1.
fn best_total(cards: &[Card]) -> u8 {
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u16;
    let hard: u16 = cards.iter().map(|c| c.value() as u16).sum();
    let totals: Vec<u16> = (0..=aces).map(|k| hard - 10 * k).collect();
    let best = totals.iter().copied().filter(|&t| t <= 21).max();
    best.unwrap_or_else(|| *totals.iter().min().unwrap()) as u8
}

proptest! {
    #[test]
    fn hand_value_is_best_total(cards in hand_strategy()) {
        prop_assert_eq!(hand_value(&cards), best_total(&cards));
    }

    #[test]
    fn hand_value_never_oversoftens(cards in hand_strategy()) {
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u16;
        let hard: u16 = cards.iter().map(|c| c.value() as u16).sum();
        let total = hand_value(&cards) as u16;
        prop_assert!(total <= hard);
        prop_assert_eq!((hard - total) % 10, 0);
        prop_assert!((hard - total) / 10 <= aces);
    }

    #[test]
    fn resolve_matches_priority_table(p in 2u8..=30, d in 2u8..=30) {
        let expected = if p > 21 {
            Outcome::Loss
        } else if d > 21 {
            Outcome::Win
        } else if p == 21 {
            if d == 21 { Outcome::Push } else { Outcome::Win }
        } else if p > d {
            Outcome::Win
        } else if p < d {
            Outcome::Loss
        } else {
            Outcome::Push
        };
        prop_assert_eq!(resolve(p, d).outcome(), expected);
        prop_assert_eq!(resolve(p, d), resolve(p, d));
    }

    #[test]
    fn player_bust_always_loses(p in 22u8..=30, d in 2u8..=30) {
        prop_assert_eq!(resolve(p, d), Resolution::PlayerBust);
    }

    #[test]
    fn shoe_has_one_marker_in_range(num_decks in 1usize..=8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(num_decks, &mut rng);
        let n = num_decks * 52;
        let markers: Vec<usize> = shoe
            .iter()
            .enumerate()
            .filter(|(_, item)| **item == DealtItem::Marker)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(markers.len(), 1);
        prop_assert_eq!(shoe.cards_remaining(), n);
        prop_assert!(markers[0] >= n * 4 / 10 && markers[0] <= n * 9 / 10);
        prop_assert_eq!(markers[0], shoe.marker_pos());
    }
}
