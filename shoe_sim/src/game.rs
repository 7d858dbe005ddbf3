//! Module that focuses on running the rounds of a simulation. The `SimulationEngine` seats the
//! players at a table, deals and settles each round, and keeps the statistics for every seat.

pub mod player;
pub mod table;
pub mod prelude {
    pub use super::{DealerRound, PlayerRound, RoundResult, SimulationEngine};
    pub use crate::game::player::PlayerSim;
    pub use crate::game::table::BlackjackTableSim;
}

use crate::stats::Statistics;
use crate::{ConfigError, SimulationConfig, SimulationError};
use player::PlayerSim;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use shoe_lib::{Hand, Resolution, Shoe};
use table::BlackjackTableSim;

/// A single player's hand from a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRound {
    pub seat: usize,
    pub hand: Hand,
    pub total: u8,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerRound {
    pub hand: Hand,
    pub total: u8,
}

/// Everything that happened in one round of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub per_player: Vec<PlayerRound>,
    pub dealer: DealerRound,
    /// The marker came up while this round was dealt.
    pub marker_drawn: bool,
    /// The shoe was rebuilt for this round, either before dealing because it ran low or after
    /// dealing because the marker came up.
    pub reshuffled: bool,
}

/// Struct that provides the functionality to simulate many hands of blackjack at a single table.
/// The engine owns the table (and through it the shoe) along with every player's statistics.
pub struct SimulationEngine {
    config: SimulationConfig,
    table: BlackjackTableSim,
    players: Vec<PlayerSim>,
    games_played: u64,
}

impl SimulationEngine {
    /// Associated method for building a new engine from `config`. Fails if the number of players
    /// or decks is outside of the supported range.
    pub fn new(config: SimulationConfig) -> Result<SimulationEngine, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let table = BlackjackTableSim::new(config.num_decks, config.num_players, rng);
        let players = (0..config.num_players).map(PlayerSim::new).collect();
        Ok(SimulationEngine {
            config,
            table,
            players,
            games_played: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    pub fn shoe(&self) -> &Shoe {
        self.table.shoe()
    }

    /// Number of times the shoe has been rebuilt because it ran low or the marker came up, since
    /// the engine was created or last reset.
    pub fn num_reshuffles(&self) -> u64 {
        self.table.num_reshuffles
    }

    /// Plays a single round: deals every seat two cards, settles each player against the dealer
    /// and records the outcomes. The shoe is rebuilt before dealing if it is running low, and
    /// after dealing if the marker came up.
    pub fn play_one_round(&mut self) -> Result<RoundResult, SimulationError> {
        let reshuffled_before = self.table.prepare_round();

        let marker_drawn = match self.table.deal_hand(&mut self.players) {
            Ok(marker_drawn) => marker_drawn,
            Err(e) => {
                // Leave no half dealt hands behind
                self.reset_hands();
                return Err(e);
            }
        };

        let dealer_total = self.table.dealers_hand.value();
        let per_player = self
            .players
            .iter_mut()
            .map(|player| {
                let resolution = player.settle(dealer_total);
                PlayerRound {
                    seat: player.seat(),
                    hand: player.hand().clone(),
                    total: player.hand_value(),
                    resolution,
                }
            })
            .collect();
        let dealer = DealerRound {
            hand: self.table.dealers_hand.clone(),
            total: dealer_total,
        };
        self.games_played += 1;

        self.reset_hands();
        let reshuffled_after = self.table.finish_hand();

        Ok(RoundResult {
            per_player,
            dealer,
            marker_drawn,
            reshuffled: reshuffled_before || reshuffled_after,
        })
    }

    /// Resets the statistics, rebuilds the shoe and plays `num_hands` rounds.
    pub fn run_many(&mut self, num_hands: u64) -> Result<(), SimulationError> {
        self.run_many_with_progress(num_hands, |played, total| {
            log::info!("progress: {}/{} hands", played, total);
        })
    }

    /// Same as `run_many`, calling `progress` with the number of hands played so far and the
    /// total every `num_hands / 10` hands. Progress is only reported for runs of more than 100 hands.
    pub fn run_many_with_progress<F>(
        &mut self,
        num_hands: u64,
        mut progress: F,
    ) -> Result<(), SimulationError>
    where
        F: FnMut(u64, u64),
    {
        if num_hands == 0 {
            return Err(SimulationError::NoHands);
        }

        log::info!(
            "running simulation of {} hands for {} players with {} decks",
            num_hands,
            self.num_players(),
            self.config().num_decks
        );
        self.reset();

        let report_every = if num_hands > 100 {
            Some(num_hands / 10)
        } else {
            None
        };
        for played in 0..num_hands {
            if let Some(step) = report_every {
                if played % step == 0 {
                    progress(played, num_hands);
                }
            }
            self.play_one_round()?;
        }

        log::info!("simulation of {} hands completed", num_hands);
        Ok(())
    }

    /// Method to get a `Statistics` object derived from the current data recorded in `self`.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            games_played: self.games_played,
            per_player: self.players.iter().map(|p| *p.stats()).collect(),
        }
    }

    /// Method for resetting the state of the engine so a fresh simulation can be run.
    /// Clears every statistic, including the reshuffle count, and rebuilds the shoe.
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.reset_stats();
        }
        self.table.reset();
        self.table.reset_shoe();
        self.games_played = 0;
    }

    fn reset_hands(&mut self) {
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.table.reset();
    }
}
