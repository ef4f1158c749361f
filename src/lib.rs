//! # snakes-ladders
//!
//! A Snakes & Ladders turn engine, independent of any display technology.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: `GameState` is a plain value passed to the engine by
//!    `&mut`. Any number of games can run side by side, and tests need no
//!    display surface.
//!
//! 2. **No Hidden Randomness**: the engine takes rolls as input. Dice live
//!    behind `RollSource` (seeded ChaCha8 or a scripted sequence).
//!
//! 3. **Events Out, Commands In**: front ends issue `start_game`,
//!    `roll_and_move`, `reset_game` and redraw from the `GameEvent`s they
//!    receive.
//!
//! 4. **Pacing Is Presentation**: pauses between steps go through a `Pacer`
//!    and never affect where a token ends up.
//!
//! ## Modules
//!
//! - `board`: squares, ladder/snake topology, grid layout
//! - `core`: players, state, dice, pacing, configuration
//! - `rules`: the turn state machine
//! - `events`: game events and sinks
//! - `session`: start/roll/reset command boundary
//! - `render`: plain-text board
//! - `error`: error types

pub mod board;
pub mod core;
pub mod error;
pub mod events;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::board::{BoardTopology, JumpKind, Landing, Square};

pub use crate::core::{
    FixedRolls, GameConfig, GameRng, GameState, NoPacing, Pacer, Pacing, PacingConfig, Pause,
    Player, PlayerId, PlayerMap, RollSource, SleepPacer, TurnPhase, TurnRecord,
};

pub use crate::error::{ConfigError, GameError, TopologyError};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::rules::{TurnEngine, TurnOutcome, TurnProgress, TurnResult};

pub use crate::session::GameSession;
