//! Core types: players, state, dice, pacing, configuration.

pub mod config;
pub mod pacing;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, PacingConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use pacing::{NoPacing, Pacer, Pacing, Pause, SleepPacer};
pub use player::{roster, Player, PlayerId, PlayerMap, PALETTE};
pub use rng::{FixedRolls, GameRng, RollSource, DIE_FACES};
pub use state::{GameState, TurnPhase, TurnRecord};
