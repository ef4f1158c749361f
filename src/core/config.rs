//! Game configuration types.
//!
//! - `PacingConfig`: animation timing for the front end
//! - `GameConfig`: board, player limits, dice seed, pacing
//!
//! Configs are plain serde structs so they can be loaded from JSON. Every
//! field has a default, so `{}` is a valid config for the classic game.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::BoardTopology;
use crate::error::ConfigError;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 10;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 1;

/// Animation timing, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause after each square stepped.
    pub step_ms: u64,

    /// Pause between the end of the walk and a snake/ladder jump.
    pub before_transform_ms: u64,

    /// Pause after a jump is shown.
    pub after_transform_ms: u64,

    /// How long the dice tumble before showing the result.
    pub roll_ms: u64,

    /// Interval between tumbling dice faces.
    pub roll_frame_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            step_ms: 250,
            before_transform_ms: 500,
            after_transform_ms: 300,
            roll_ms: 900,
            roll_frame_ms: 120,
        }
    }
}

impl PacingConfig {
    /// No waiting anywhere.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            step_ms: 0,
            before_transform_ms: 0,
            after_transform_ms: 0,
            roll_ms: 0,
            roll_frame_ms: 0,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Dice seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Fewest players accepted by `start_game`.
    pub min_players: usize,

    /// Most players accepted by `start_game`.
    pub max_players: usize,

    /// Ladder and snake placement.
    pub topology: BoardTopology,

    /// Front-end animation timing.
    pub pacing: PacingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            topology: BoardTopology::classic(),
            pacing: PacingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the player limits.
    ///
    /// Topology is validated while deserializing, so only the limits can be
    /// wrong here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_players, self.max_players);
        if min < MIN_PLAYERS || min > max || max > MAX_PLAYERS {
            return Err(ConfigError::PlayerLimits { min, max, cap: MAX_PLAYERS });
        }
        Ok(())
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom board.
    #[must_use]
    pub fn with_topology(mut self, topology: BoardTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set animation timing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Narrow the accepted player count.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.min_players, 1);
        assert_eq!(config.max_players, 10);
        assert_eq!(config.topology, BoardTopology::classic());
        assert_eq!(config.pacing.step_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_pacing(PacingConfig::instant())
            .with_player_limits(2, 4);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.pacing.roll_ms, 0);
        assert_eq!((config.min_players, config.max_players), (2, 4));
    }

    #[test]
    fn test_empty_json_is_classic() {
        let config = GameConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "seed": 7,
            "pacing": { "step_ms": 10 },
            "topology": { "ladders": [{ "from": 2, "to": 99 }], "snakes": [] }
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pacing.step_ms, 10);
        assert_eq!(config.pacing.before_transform_ms, 500);
        let two = Square::new(2).unwrap();
        assert_eq!(config.topology.ladder_at(two), Square::new(99));
    }

    #[test]
    fn test_invalid_topology_rejected() {
        let json = r#"{ "topology": { "snakes": [{ "from": 5, "to": 50 }] } }"#;
        assert!(matches!(GameConfig::from_json_str(json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_invalid_limits_rejected() {
        for (min, max) in [(0, 4), (5, 4), (1, 11)] {
            let err = GameConfig::default().with_player_limits(min, max).validate().unwrap_err();
            assert!(matches!(err, ConfigError::PlayerLimits { .. }));
        }
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
