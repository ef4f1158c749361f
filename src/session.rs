//! Command boundary.
//!
//! A [`GameSession`] bundles one game's state with the engine, a roll source
//! and a pacer, and exposes the three commands a front end issues: start,
//! roll, reset. Events go to whatever [`EventSink`] the caller passes in.
//!
//! ```
//! use snakes_ladders::core::{FixedRolls, GameConfig, NoPacing, PlayerId};
//! use snakes_ladders::events::EventLog;
//! use snakes_ladders::session::GameSession;
//!
//! let dice = FixedRolls::new([3]);
//! let mut session = GameSession::with_parts(GameConfig::default(), dice, NoPacing);
//! let mut log = EventLog::new();
//!
//! session.start_game(&["Alice", "Bob"], 2, &mut log).unwrap();
//! session.roll_and_move(&mut log).unwrap();
//!
//! // Alice walked 1 -> 4 and climbed the ladder to 14
//! assert_eq!(session.state().position(PlayerId::new(0)).map(|s| s.get()), Some(14));
//! ```

use log::{debug, info, warn};

use crate::core::{
    roster, GameConfig, GameRng, GameState, NoPacing, Pacer, RollSource, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::error::GameError;
use crate::events::{EventSink, GameEvent};
use crate::rules::{TurnEngine, TurnOutcome};

/// One game, start to finish, plus the collaborators it needs.
#[derive(Debug)]
pub struct GameSession<R = GameRng, P = NoPacing> {
    config: GameConfig,
    engine: TurnEngine,
    state: GameState,
    dice: R,
    pacer: P,
}

impl GameSession<GameRng, NoPacing> {
    /// Session with seeded dice (or OS entropy if the config has no seed)
    /// and no pacing.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let dice = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_parts(config, dice, NoPacing)
    }
}

impl<R: RollSource, P: Pacer> GameSession<R, P> {
    /// Session with explicit dice and pacer.
    pub fn with_parts(config: GameConfig, dice: R, pacer: P) -> Self {
        Self {
            engine: TurnEngine::new(config.topology.clone()),
            state: GameState::new(),
            config,
            dice,
            pacer,
        }
    }

    /// Seat `count` players and start.
    ///
    /// Names beyond `count` are ignored; missing or blank names become
    /// `Player N`. Starting over a finished game replaces it.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPlayerCount`] if `count` is outside the configured
    /// limits or outside 1-10, whatever the config says. State is unchanged.
    pub fn start_game<S: AsRef<str>>(
        &mut self,
        names: &[S],
        count: usize,
        sink: &mut impl EventSink,
    ) -> Result<(), GameError> {
        // Config limits narrow the board's 1-10 range, never widen it
        let min = self.config.min_players.max(MIN_PLAYERS);
        let max = self.config.max_players.min(MAX_PLAYERS);
        if !(min..=max).contains(&count) {
            warn!("rejected start with {} players", count);
            return Err(GameError::InvalidPlayerCount { count, min, max });
        }

        self.state.initialize(roster(names, count));
        info!("game started with {} players", count);
        sink.on_event(&self.state, &GameEvent::GameStarted { player_count: count });
        Ok(())
    }

    /// Roll the die for the current player and resolve the turn.
    ///
    /// Returns `Ok(None)` without rolling when the game isn't waiting for a
    /// roll (not started, mid-move, or finished).
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidRollValue`] if the roll source produced something
    /// other than 1-6.
    pub fn roll_and_move(
        &mut self,
        sink: &mut impl EventSink,
    ) -> Result<Option<TurnOutcome>, GameError> {
        if !self.engine.can_roll(&self.state) {
            debug!("roll ignored while {}", self.state.phase());
            return Ok(None);
        }

        let roll = self.dice.roll();
        match self.engine.take_turn(&mut self.state, roll, sink, &mut self.pacer) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(GameError::IllegalTurnRequest { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Clear the game and return to `Idle`.
    pub fn reset_game(&mut self, sink: &mut impl EventSink) {
        info!("game reset");
        self.engine.abandon(&mut self.state, sink);
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The turn engine.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The pacer, for drivers that keep state in it between turns.
    pub fn pacer_mut(&mut self) -> &mut P {
        &mut self.pacer
    }
}
