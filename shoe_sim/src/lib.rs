pub mod game;
pub mod stats;
pub mod write;

pub use game::prelude::*;
use serde::Deserialize;
use thiserror::Error;

pub mod prelude {
    pub use super::{
        create_engine, game::prelude::*, stats::PlayerStats, stats::Statistics, ConfigError,
        SimulationConfig, SimulationConfigBuilder, SimulationError,
    };
}

/// Seats supported at a table.
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 7;
/// Decks supported in a shoe.
pub const MIN_DECKS: usize = 1;
pub const MAX_DECKS: usize = 8;

/// Errors for configurations the engine refuses to be built with. Callers are expected
/// to clamp or default bad input themselves before building an engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("number of players must be between 1 and 7, got {0}")]
    Players(usize),
    #[error("number of decks must be between 1 and 8, got {0}")]
    Decks(usize),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("a simulation must run at least one hand")]
    NoHands,
    #[error("the shoe ran out of cards in the middle of a round")]
    EmptyShoe,
    #[error("unable to write statistics: {0}")]
    Write(#[from] std::io::Error),
    #[error("unable to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Struct for configuring a `SimulationEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    pub num_players: usize,
    pub num_decks: usize,
    /// Seed for the engine's random source. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Associated method for returning a new `SimulationConfigBuilder` object. Allows choosing the
    /// number of players at the table, the number of decks in the shoe and the seed used for shuffling.
    pub fn new() -> SimulationConfigBuilder {
        SimulationConfigBuilder {
            num_players: None,
            num_decks: None,
            seed: None,
        }
    }

    /// Checks that the player and deck counts are within the supported ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::Players(self.num_players));
        }
        if !(MIN_DECKS..=MAX_DECKS).contains(&self.num_decks) {
            return Err(ConfigError::Decks(self.num_decks));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    /// Returns the standard configuration, a single player at a single deck table.
    fn default() -> Self {
        SimulationConfig::new().build()
    }
}

/// Struct to implement builder pattern for `SimulationConfig`
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfigBuilder {
    num_players: Option<usize>,
    num_decks: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Method for choosing the number of players seated at the table
    pub fn num_players(&mut self, players: usize) -> &mut Self {
        self.num_players = Some(players);
        self
    }

    /// Method for choosing the number of decks used in the shoe
    pub fn num_decks(&mut self, decks: usize) -> &mut Self {
        self.num_decks = Some(decks);
        self
    }

    /// Method for fixing the seed of the random source, making the simulation repeatable
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for building a `SimulationConfig` object from the given builder.
    pub fn build(&mut self) -> SimulationConfig {
        SimulationConfig {
            num_players: self.num_players.unwrap_or(1),
            num_decks: self.num_decks.unwrap_or(1),
            seed: self.seed,
        }
    }
}

/// Builds an engine for `num_players` players drawing from a shoe of `num_decks` decks,
/// seeded from entropy.
pub fn create_engine(
    num_players: usize,
    num_decks: usize,
) -> Result<SimulationEngine, ConfigError> {
    SimulationEngine::new(
        SimulationConfig::new()
            .num_players(num_players)
            .num_decks(num_decks)
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_players, 1);
        assert_eq!(config.num_decks, 1);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .num_players(5)
            .num_decks(6)
            .seed(42)
            .build();
        assert_eq!(config.num_players, 5);
        assert_eq!(config.num_decks, 6);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_config_validation() {
        let bad_players = SimulationConfig::new().num_players(0).build();
        assert_eq!(bad_players.validate(), Err(ConfigError::Players(0)));
        let bad_players = SimulationConfig::new().num_players(8).build();
        assert_eq!(bad_players.validate(), Err(ConfigError::Players(8)));
        let bad_decks = SimulationConfig::new().num_decks(9).build();
        assert_eq!(bad_decks.validate(), Err(ConfigError::Decks(9)));
        let bad_decks = SimulationConfig::new().num_decks(0).build();
        assert_eq!(bad_decks.validate(), Err(ConfigError::Decks(0)));
    }

    #[test]
    fn test_create_engine() {
        assert!(create_engine(7, 8).is_ok());
        assert!(matches!(create_engine(0, 1), Err(ConfigError::Players(0))));
        assert!(matches!(create_engine(1, 0), Err(ConfigError::Decks(0))));
    }

    #[test]
    fn test_config_from_json() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"num_players": 3, "num_decks": 2}"#).unwrap();
        assert_eq!(config, SimulationConfig::new().num_players(3).num_decks(2).build());
    }
}
