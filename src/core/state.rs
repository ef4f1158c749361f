//! Game state.
//!
//! The single authoritative record of a game: who is playing, where every
//! token stands, whose turn it is, and which phase the turn machine is in.
//!
//! ## Phases
//!
//! ```text
//! Idle --initialize--> AwaitingRoll --roll--> Moving --+--> AwaitingRoll (next player)
//!  ^                                                  +--> Finished
//!  +------------------------- reset (from any phase) -----------+
//! ```
//!
//! Only the turn engine moves tokens. Sessions and tests read state through
//! the accessors and change it through `initialize`/`reset` and the engine.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Landing, Square};
use crate::rules::engine::PendingMove;

/// Turn machine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No game in progress.
    #[default]
    Idle,
    /// Waiting for the current player to roll.
    AwaitingRoll,
    /// A roll is being resolved. New rolls are rejected.
    Moving,
    /// Someone reached 100. Terminal until reset.
    Finished,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TurnPhase::Idle => "idle",
            TurnPhase::AwaitingRoll => "awaiting a roll",
            TurnPhase::Moving => "moving",
            TurnPhase::Finished => "finished",
        };
        f.write_str(text)
    }
}

/// A completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    pub roll: u8,
    /// Where the token started.
    pub from: Square,
    /// Squares walked, in order. Empty on an overshoot; at most one per die face.
    pub path: SmallVec<[Square; 6]>,
    /// Landing resolution. `None` when the roll overshot 100.
    pub landing: Option<Landing>,
    /// Where the token ended.
    pub to: Square,
}

/// Full game state.
///
/// `players` and `positions` are parallel and always the same length.
/// History is an `im::Vector`, so cloning a state for a snapshot is cheap.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    players: PlayerMap<Player>,
    positions: PlayerMap<Square>,
    current: PlayerId,
    phase: TurnPhase,
    winner: Option<PlayerId>,
    turn_number: u32,
    history: Vector<TurnRecord>,

    /// The turn being resolved while `phase == Moving`.
    pub(crate) pending: Option<PendingMove>,
}

impl GameState {
    /// Create an empty, unstarted state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat players and start a game.
    ///
    /// Every token goes to square 1 and player 0 moves first. Player count is
    /// not validated here; see
    /// [`GameSession::start_game`](crate::session::GameSession::start_game).
    pub fn initialize(&mut self, players: Vec<Player>) {
        let count = players.len();
        self.players = players.into_iter().collect();
        self.positions = PlayerMap::with_value(count, Square::START);
        self.current = PlayerId::new(0);
        self.phase = TurnPhase::AwaitingRoll;
        self.winner = None;
        self.turn_number = 1;
        self.history = Vector::new();
        self.pending = None;
    }

    /// Wipe everything and return to `Idle`.
    ///
    /// Abandons any turn in flight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // === Phase ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True once a game has been started and not reset.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != TurnPhase::Idle
    }

    /// True while a roll is being resolved.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.phase == TurnPhase::Moving
    }

    /// True once someone has won.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == TurnPhase::Finished
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    // === Players ===

    /// Number of seated players (0 when idle).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All seated players.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// A seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Whose turn it is, or `None` when no game is running.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.is_started().then_some(self.current)
    }

    /// Display name for a seat, falling back to the seat number.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> String {
        self.player(id).map_or_else(|| id.to_string(), |p| p.name.clone())
    }

    // === Positions ===

    /// All token positions, in seat order.
    #[must_use]
    pub fn positions(&self) -> &PlayerMap<Square> {
        &self.positions
    }

    /// A player's square.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<Square> {
        self.positions.get(id).copied()
    }

    // === History ===

    /// Turn number (starts at 1, 0 when idle).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Engine-only mutation ===

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_position(&mut self, id: PlayerId, square: Square) {
        self.positions[id] = square;
    }

    /// Hand the turn to the next seat and return it.
    pub(crate) fn advance_player(&mut self) -> PlayerId {
        self.current = self.current.next(self.player_count());
        self.turn_number += 1;
        self.phase = TurnPhase::AwaitingRoll;
        self.current
    }

    pub(crate) fn declare_winner(&mut self, id: PlayerId) {
        self.winner = Some(id);
        self.phase = TurnPhase::Finished;
    }

    pub(crate) fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }
}
