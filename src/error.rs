//! Error types.
//!
//! - [`GameError`]: rejected commands and turn requests
//! - [`TopologyError`]: a board whose ladders/snakes break the jump rules
//! - [`ConfigError`]: configuration that could not be read or validated

use thiserror::Error;

use crate::core::state::TurnPhase;

/// Errors surfaced by the session and the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player count outside the supported range. User-correctable.
    #[error("Player count must be between {min} and {max}, got {count}.")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    /// Roll requested while the game is not waiting for one.
    ///
    /// Usually a race between input and animation, not a user mistake.
    #[error("cannot take a turn while the game is {phase}")]
    IllegalTurnRequest { phase: TurnPhase },

    /// Die value outside 1-6. Indicates a broken roll source.
    #[error("die roll {value} is outside 1-6")]
    InvalidRollValue { value: u8 },
}

/// Errors raised while building a board topology.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("square {0} is off the board")]
    OffBoard(u8),

    #[error("square {0} cannot start a jump")]
    ReservedSource(u8),

    #[error("jump from {0} leads back to itself")]
    SelfLoop(u8),

    #[error("square {0} already starts a jump")]
    DuplicateSource(u8),

    #[error("jump {from} -> {to} lands on another jump")]
    ChainedJump { from: u8, to: u8 },

    #[error("ladder {from} -> {to} must climb")]
    LadderGoesDown { from: u8, to: u8 },

    #[error("snake {from} -> {to} must descend")]
    SnakeGoesUp { from: u8, to: u8 },
}

/// Errors raised while loading a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player limits {min}..={max} are invalid (must satisfy 1 <= min <= max <= {cap})")]
    PlayerLimits { min: usize, max: usize, cap: usize },
}
