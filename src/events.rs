//! Game events.
//!
//! Events are how the engine talks to whatever is drawing the game. The
//! engine pushes every observable change into an [`EventSink`] in the order
//! it happens; the sink decides how to render it.
//!
//! ## Turn sequence
//!
//! A normal turn emits:
//!
//! ```text
//! DiceRolled, PlayerStepped × roll, PlayerMoved, [TransformApplied], TurnAdvanced | GameWon
//! ```
//!
//! An overshooting roll emits `DiceRolled, PlayerStayed, TurnAdvanced`.

use serde::{Deserialize, Serialize};

use crate::board::{JumpKind, Square};
use crate::core::{GameState, PlayerId};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A game began with this many players, all on square 1.
    GameStarted { player_count: usize },

    /// The die came up `value` for `player`.
    DiceRolled { player: PlayerId, value: u8 },

    /// The token advanced one square.
    PlayerStepped { player: PlayerId, position: Square },

    /// The roll would pass 100, so the token did not move.
    PlayerStayed { player: PlayerId, position: Square },

    /// The walk finished.
    PlayerMoved { player: PlayerId, from: Square, to: Square },

    /// A ladder or snake moved the token.
    TransformApplied {
        player: PlayerId,
        kind: JumpKind,
        from: Square,
        to: Square,
    },

    /// It is now `next`'s turn.
    TurnAdvanced { next: PlayerId },

    /// `player` reached 100.
    GameWon { player: PlayerId },

    /// The game was cleared.
    GameReset,
}

impl GameEvent {
    /// Move-log line for this event.
    ///
    /// Names come from `state`. Per-square steps have no log line.
    #[must_use]
    pub fn describe(&self, state: &GameState) -> Option<String> {
        let line = match self {
            GameEvent::GameStarted { .. } => {
                format!("Game started. All players begin on square {}.", Square::START)
            }
            GameEvent::DiceRolled { player, value } => {
                format!("{} rolled {}", state.name_of(*player), value)
            }
            GameEvent::PlayerStepped { .. } => return None,
            GameEvent::PlayerStayed { player, position } => {
                format!("{} stays at {} (needs exact roll).", state.name_of(*player), position)
            }
            GameEvent::PlayerMoved { player, from, to } => {
                format!("{} moved: {} -> {}", state.name_of(*player), from, to)
            }
            GameEvent::TransformApplied { kind, from, to, .. } => {
                format!("{}: {} -> {}", kind, from, to)
            }
            GameEvent::TurnAdvanced { next } => format!("{}'s turn", state.name_of(*next)),
            GameEvent::GameWon { player } => {
                format!("{} reached {} and won the game.", state.name_of(*player), Square::GOAL)
            }
            GameEvent::GameReset => "Game reset.".to_string(),
        };
        Some(line)
    }
}

/// Receiver for game events.
///
/// `state` already reflects the event when `on_event` is called, so a sink
/// can redraw tokens straight from it.
pub trait EventSink {
    fn on_event(&mut self, state: &GameState, event: &GameEvent);
}

/// Discards every event.
impl EventSink for () {
    fn on_event(&mut self, _state: &GameState, _event: &GameEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        (**self).on_event(state, event);
    }
}

/// Records events in order. Used by tests and replays.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Squares from every `PlayerStepped`, in order.
    #[must_use]
    pub fn steps(&self) -> Vec<Square> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::PlayerStepped { position, .. } => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, _state: &GameState, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
