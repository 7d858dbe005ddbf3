use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The category a resolved hand falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Loss => write!(f, "LOSS"),
            Outcome::Push => write!(f, "PUSH"),
        }
    }
}

/// How a player's hand was settled against the dealer, keeping the reason alongside the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Player went over 21, the dealer's hand does not matter.
    PlayerBust,
    DealerBust,
    /// Both player and dealer hold 21.
    BothTwentyOne,
    /// Player holds 21 and the dealer does not.
    Blackjack,
    HigherTotal,
    LowerTotal,
    EqualTotal,
}

impl Resolution {
    pub fn outcome(&self) -> Outcome {
        match self {
            Resolution::DealerBust | Resolution::Blackjack | Resolution::HigherTotal => {
                Outcome::Win
            }
            Resolution::PlayerBust | Resolution::LowerTotal => Outcome::Loss,
            Resolution::BothTwentyOne | Resolution::EqualTotal => Outcome::Push,
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::PlayerBust => write!(f, "LOSS (Bust)"),
            Resolution::DealerBust => write!(f, "WIN (Dealer Bust)"),
            Resolution::BothTwentyOne => write!(f, "PUSH (Both have 21)"),
            Resolution::Blackjack => write!(f, "WIN (Blackjack)"),
            Resolution::HigherTotal | Resolution::LowerTotal | Resolution::EqualTotal => {
                write!(f, "{}", self.outcome())
            }
        }
    }
}

/// Settles a player total against a dealer total.
///
/// Rules are checked in order: a player bust always loses, then a dealer bust
/// always wins, then a player 21 wins unless the dealer also has 21, and
/// otherwise the higher total wins with ties pushing.
pub fn resolve(player_total: u8, dealer_total: u8) -> Resolution {
    if player_total > 21 {
        Resolution::PlayerBust
    } else if dealer_total > 21 {
        Resolution::DealerBust
    } else if player_total == 21 {
        if dealer_total == 21 {
            Resolution::BothTwentyOne
        } else {
            Resolution::Blackjack
        }
    } else if player_total > dealer_total {
        Resolution::HigherTotal
    } else if player_total < dealer_total {
        Resolution::LowerTotal
    } else {
        Resolution::EqualTotal
    }
}
