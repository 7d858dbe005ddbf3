//! The dealing shoe. A shoe is built from one or more decks, shuffled, and then
//! cut with a marker card at a random depth. Cards come out of the front of the
//! shoe in order until the marker shows up, at which point the shoe is spent and
//! has to be rebuilt before another round is dealt.

use crate::card::{self, Card};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Shallowest depth the marker may be placed at, in tenths of the shoe.
pub const MIN_PENETRATION_TENTHS: usize = 4;
/// Deepest depth the marker may be placed at, in tenths of the shoe.
pub const MAX_PENETRATION_TENTHS: usize = 9;

/// Anything that can come out of the shoe: either a playing card or the cut marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealtItem {
    Card(Card),
    Marker,
}

/// Where a shoe is in its lifecycle. `Shoe::rebuild` walks through `Building`,
/// `Shuffled` and `Marked` in one call, so callers only ever see a shoe from
/// `Marked` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoeState {
    /// Every card from every deck is in place, in fixed order.
    Building,
    Shuffled,
    /// The marker is in place and nothing has been drawn yet.
    Marked,
    Dealing,
    /// The marker has been drawn; the shoe must be rebuilt before the next round.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Shoe {
    items: VecDeque<DealtItem>,
    num_decks: usize,
    marker_pos: usize,
    cards_remaining: usize,
    state: ShoeState,
}

impl Shoe {
    /// Associated function to build a new, shuffled and marked shoe from `num_decks` decks.
    pub fn new<R: Rng + ?Sized>(num_decks: usize, rng: &mut R) -> Self {
        let mut shoe = Shoe {
            items: VecDeque::with_capacity(num_decks * 52 + 1),
            num_decks,
            marker_pos: 0,
            cards_remaining: 0,
            state: ShoeState::Building,
        };
        shoe.rebuild(rng);
        shoe
    }

    /// Throws away whatever is left in the shoe and builds it up again from full decks.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.build();
        self.shuffle(rng);
        self.mark(rng);
        log::debug!(
            "rebuilt shoe of {} decks, marker after {} of {} cards",
            self.num_decks,
            self.marker_pos,
            self.cards_remaining
        );
    }

    fn build(&mut self) {
        self.items.clear();
        self.items
            .extend(card::decks(self.num_decks).into_iter().map(DealtItem::Card));
        self.cards_remaining = self.items.len();
        self.state = ShoeState::Building;
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug_assert_eq!(self.state, ShoeState::Building);
        self.items.make_contiguous().shuffle(rng);
        self.state = ShoeState::Shuffled;
    }

    fn mark<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug_assert_eq!(self.state, ShoeState::Shuffled);
        let marker_pos = Self::marker_position(self.cards_remaining, rng);
        self.items.insert(marker_pos, DealtItem::Marker);
        self.marker_pos = marker_pos;
        self.state = ShoeState::Marked;
    }

    /// Picks how many cards are dealt before the marker, uniformly between 40% and 90% of `n`.
    fn marker_position<R: Rng + ?Sized>(n: usize, rng: &mut R) -> usize {
        let min_pos = n * MIN_PENETRATION_TENTHS / 10;
        let max_pos = n * MAX_PENETRATION_TENTHS / 10;
        rng.gen_range(min_pos..=max_pos)
    }

    /// Removes the next item from the front of the shoe, marker included.
    pub fn draw(&mut self) -> Option<DealtItem> {
        let item = self.items.pop_front()?;
        match item {
            DealtItem::Card(_) => {
                self.cards_remaining -= 1;
                if self.state == ShoeState::Marked {
                    self.state = ShoeState::Dealing;
                }
            }
            DealtItem::Marker => {
                log::debug!("marker drawn with {} cards left", self.cards_remaining);
                self.state = ShoeState::Exhausted;
            }
        }
        Some(item)
    }

    /// Deals the next card, silently passing over the marker if it comes up.
    /// Whether the marker was passed can be checked afterwards with `is_exhausted`.
    pub fn deal_card(&mut self) -> Option<Card> {
        loop {
            match self.draw()? {
                DealtItem::Card(card) => return Some(card),
                DealtItem::Marker => continue,
            }
        }
    }

    /// Number of playing cards left in the shoe, not counting the marker.
    pub fn cards_remaining(&self) -> usize {
        self.cards_remaining
    }

    /// Number of items left in the shoe, counting the marker if it has not been drawn yet.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    /// Number of cards that sit in front of the marker in a freshly built shoe.
    pub fn marker_pos(&self) -> usize {
        self.marker_pos
    }

    pub fn state(&self) -> ShoeState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == ShoeState::Exhausted
    }

    /// Checks whether the shoe holds enough cards to give every one of `seats` two cards.
    pub fn can_deal_round(&self, seats: usize) -> bool {
        self.cards_remaining >= seats * 2
    }

    /// Iterates over what is left in the shoe in dealing order without drawing anything.
    pub fn iter(&self) -> impl Iterator<Item = &DealtItem> {
        self.items.iter()
    }
}
