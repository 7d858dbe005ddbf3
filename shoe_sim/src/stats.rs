use serde::{Deserialize, Serialize};
use shoe_lib::Outcome;
use std::fmt::Display;

const WIDTH: usize = 80;
const TEXT_WIDTH: usize = "total hands played:".len() + 20;
const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;

/// Running tally of how a single player's hands have gone.
/// Counters only ever go up, and every recorded hand lands in exactly one of wins, losses or pushes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayerStats")]
pub struct PlayerStats {
    wins: u64,
    losses: u64,
    pushes: u64,
    hands_played: u64,
}

/// Counters as they arrive from JSON, before they are checked against each other.
#[derive(Deserialize)]
struct RawPlayerStats {
    wins: u64,
    losses: u64,
    pushes: u64,
    hands_played: u64,
}

#[derive(Debug, thiserror::Error)]
#[error("wins, losses and pushes add up to {outcomes}, but {hands_played} hands were played")]
pub struct InconsistentStats {
    outcomes: u128,
    hands_played: u64,
}

impl TryFrom<RawPlayerStats> for PlayerStats {
    type Error = InconsistentStats;

    fn try_from(raw: RawPlayerStats) -> Result<Self, Self::Error> {
        let outcomes = raw.wins as u128 + raw.losses as u128 + raw.pushes as u128;
        if outcomes != raw.hands_played as u128 {
            return Err(InconsistentStats {
                outcomes,
                hands_played: raw.hands_played,
            });
        }
        Ok(PlayerStats {
            wins: raw.wins,
            losses: raw.losses,
            pushes: raw.pushes,
            hands_played: raw.hands_played,
        })
    }
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Method for recording the outcome of a resolved hand
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
        self.hands_played += 1;
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    fn percentage(&self, count: u64) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        (count as f64 / self.hands_played as f64) * 100.0
    }

    pub fn win_pct(&self) -> f64 {
        self.percentage(self.wins)
    }

    pub fn loss_pct(&self) -> f64 {
        self.percentage(self.losses)
    }

    pub fn push_pct(&self) -> f64 {
        self.percentage(self.pushes)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of everything recorded by an engine since its last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u64,
    pub per_player: Vec<PlayerStats>,
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "-".repeat(WIDTH))?;
        writeln!(f, "{:-^WIDTH$}", "game statistics")?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "total hands played:", self.games_played
        )?;
        for (i, player) in self.per_player.iter().enumerate() {
            writeln!(f, "{:-^WIDTH$}", format!("player {}", i + 1))?;
            writeln!(
                f,
                "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
                "wins:",
                format!("{} ({:.2}%)", player.wins, player.win_pct())
            )?;
            writeln!(
                f,
                "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
                "losses:",
                format!("{} ({:.2}%)", player.losses, player.loss_pct())
            )?;
            writeln!(
                f,
                "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
                "pushes:",
                format!("{} ({:.2}%)", player.pushes, player.push_pct())
            )?;
        }
        write!(f, "{}", "-".repeat(WIDTH))
    }
}
