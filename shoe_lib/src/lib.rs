//! Cards, the dealing shoe, and the rules for totalling and settling blackjack hands.

pub mod card;
mod hand;
mod outcome;
pub mod shoe;

pub use card::{Card, Rank, Suit};
pub use hand::{hand_value, is_bust, is_soft, Hand};
pub use outcome::{resolve, Outcome, Resolution};
pub use shoe::{DealtItem, Shoe, ShoeState};
