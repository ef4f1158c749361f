//! Turn resolution.
//!
//! One turn: roll → step-by-step walk → one snake/ladder lookup → win check →
//! hand-off. The engine owns only the board; state is passed in by `&mut`
//! so the same engine can drive any number of independent games.
//!
//! A turn can be driven two ways:
//!
//! - [`TurnEngine::take_turn`] runs it to completion, calling a [`Pacer`]
//!   at every pause.
//! - [`TurnEngine::begin_turn`] + [`TurnEngine::advance`] hand control back
//!   at every pause, for drivers with their own timers. A reset between two
//!   `advance` calls abandons the turn.

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{BoardTopology, Landing, Square};
use crate::core::pacing::{Pacer, Pacing, Pause};
use crate::core::rng::DIE_FACES;
use crate::core::state::{GameState, TurnPhase, TurnRecord};
use crate::core::PlayerId;
use crate::error::GameError;
use crate::events::{EventSink, GameEvent};

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    /// The roll overshot 100; the token stayed put.
    Stayed { at: Square },
    /// The token moved and the next player is up.
    Moved { landing: Landing },
    /// The token reached 100.
    Won { landing: Landing },
    /// The driver aborted mid-turn and the game was reset.
    Abandoned,
}

/// Summary of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub roll: u8,
    pub result: TurnResult,
}

impl TurnOutcome {
    /// Where the token ended, if the turn completed.
    #[must_use]
    pub fn final_square(&self) -> Option<Square> {
        match self.result {
            TurnResult::Stayed { at } => Some(at),
            TurnResult::Moved { landing } | TurnResult::Won { landing } => Some(landing.to),
            TurnResult::Abandoned => None,
        }
    }
}

/// Returned by [`TurnEngine::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnProgress {
    /// Wait out this pause, then call `advance` again.
    Pause(Pause),
    /// The turn is over.
    Complete(TurnOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Overshoot: report and hand off.
    Stay,
    /// Walking toward the target, one square per advance.
    Walk { target: Square },
    /// Walk done; report it and look up the landing.
    Arrived { target: Square },
    /// Show the jump.
    Jump { landing: Landing },
    /// Jump shown; wrap up.
    Settle { landing: Landing },
}

/// A turn in flight. Lives in [`GameState`] so a reset drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    player: PlayerId,
    roll: u8,
    from: Square,
    at: Square,
    path: SmallVec<[Square; 6]>,
    stage: Stage,
}

/// The turn state machine.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    topology: BoardTopology,
}

impl TurnEngine {
    /// Create an engine for a board.
    #[must_use]
    pub fn new(topology: BoardTopology) -> Self {
        Self { topology }
    }

    /// The board this engine resolves landings on.
    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// True if a roll would be accepted right now.
    #[must_use]
    pub fn can_roll(&self, state: &GameState) -> bool {
        state.phase() == TurnPhase::AwaitingRoll
    }

    /// Resolve a whole turn for the current player.
    ///
    /// Emits `DiceRolled` followed by the turn's events. If `pacer` aborts,
    /// the game is reset and the result is [`TurnResult::Abandoned`].
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalTurnRequest`] unless the game is awaiting a roll
    /// - [`GameError::InvalidRollValue`] if `roll` is not 1-6
    ///
    /// Either way the state is left untouched.
    pub fn take_turn(
        &self,
        state: &mut GameState,
        roll: u8,
        sink: &mut impl EventSink,
        pacer: &mut impl Pacer,
    ) -> Result<TurnOutcome, GameError> {
        let player = self.begin_turn(state, roll, sink)?;

        loop {
            match self.advance(state, sink)? {
                TurnProgress::Complete(outcome) => return Ok(outcome),
                TurnProgress::Pause(pause) => {
                    if pacer.pause(pause) == Pacing::Abort {
                        debug!("{} turn abandoned during {:?}", player, pause);
                        self.abandon(state, sink);
                        return Ok(TurnOutcome { player, roll, result: TurnResult::Abandoned });
                    }
                }
            }
        }
    }

    /// Accept a roll and enter `Moving`.
    ///
    /// Emits `DiceRolled`. Nothing moves until [`advance`](Self::advance).
    pub fn begin_turn(
        &self,
        state: &mut GameState,
        roll: u8,
        sink: &mut impl EventSink,
    ) -> Result<PlayerId, GameError> {
        let phase = state.phase();
        if phase != TurnPhase::AwaitingRoll {
            debug!("roll of {} ignored while {}", roll, phase);
            return Err(GameError::IllegalTurnRequest { phase });
        }
        if !(1..=DIE_FACES).contains(&roll) {
            error!("roll source produced {}", roll);
            return Err(GameError::InvalidRollValue { value: roll });
        }

        let seat = state
            .current_player()
            .and_then(|p| Some((p, state.position(p)?)));
        let Some((player, from)) = seat else {
            return Err(GameError::IllegalTurnRequest { phase });
        };

        let stage = match from.offset(roll) {
            Some(target) => Stage::Walk { target },
            None => Stage::Stay,
        };

        state.pending = Some(PendingMove {
            player,
            roll,
            from,
            at: from,
            path: SmallVec::new(),
            stage,
        });
        state.set_phase(TurnPhase::Moving);
        emit(state, sink, GameEvent::DiceRolled { player, value: roll });

        Ok(player)
    }

    /// Run the next stage of the turn in flight.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalTurnRequest`] if no turn is in flight, e.g. because
    /// the game was reset since the last call. No events are emitted then.
    pub fn advance(
        &self,
        state: &mut GameState,
        sink: &mut impl EventSink,
    ) -> Result<TurnProgress, GameError> {
        let phase = state.phase();
        let mut pending = match (phase, state.pending.take()) {
            (TurnPhase::Moving, Some(pending)) => pending,
            _ => return Err(GameError::IllegalTurnRequest { phase }),
        };
        let player = pending.player;

        match pending.stage {
            Stage::Stay => {
                emit(state, sink, GameEvent::PlayerStayed { player, position: pending.from });
                Ok(TurnProgress::Complete(self.finish(state, sink, &pending, None)))
            }
            Stage::Walk { target } => {
                // offset(1) can't fail: `at` is strictly below a target that is on the board.
                let next = pending.at.offset(1).unwrap_or(target);
                pending.at = next;
                pending.path.push(next);
                state.set_position(player, next);
                debug!("{} stepped to {}", player, next);
                emit(state, sink, GameEvent::PlayerStepped { player, position: next });

                if next == target {
                    pending.stage = Stage::Arrived { target };
                }
                state.pending = Some(pending);
                Ok(TurnProgress::Pause(Pause::Step))
            }
            Stage::Arrived { target } => {
                let from = pending.from;
                emit(state, sink, GameEvent::PlayerMoved { player, from, to: target });

                let landing = self.topology.resolve_landing(target);
                if landing.jumped() {
                    pending.stage = Stage::Jump { landing };
                    state.pending = Some(pending);
                    return Ok(TurnProgress::Pause(Pause::BeforeTransform));
                }
                Ok(TurnProgress::Complete(self.finish(state, sink, &pending, Some(landing))))
            }
            Stage::Jump { landing } => {
                pending.at = landing.to;
                state.set_position(player, landing.to);
                debug!("{} {:?} {} -> {}", player, landing.kind, landing.from, landing.to);
                let event = GameEvent::TransformApplied {
                    player,
                    kind: landing.kind,
                    from: landing.from,
                    to: landing.to,
                };
                emit(state, sink, event);

                pending.stage = Stage::Settle { landing };
                state.pending = Some(pending);
                Ok(TurnProgress::Pause(Pause::AfterTransform))
            }
            Stage::Settle { landing } => {
                let outcome = self.finish(state, sink, &pending, Some(landing));
                Ok(TurnProgress::Complete(outcome))
            }
        }
    }

    /// Drop any turn in flight and reset the game to `Idle`.
    pub fn abandon(&self, state: &mut GameState, sink: &mut impl EventSink) {
        state.reset();
        emit(state, sink, GameEvent::GameReset);
    }

    /// Win check and hand-off. `landing` is `None` for an overshoot.
    fn finish(
        &self,
        state: &mut GameState,
        sink: &mut impl EventSink,
        pending: &PendingMove,
        landing: Option<Landing>,
    ) -> TurnOutcome {
        let player = pending.player;
        let end = landing.map_or(pending.from, |l| l.to);

        state.record_turn(TurnRecord {
            turn: state.turn_number(),
            player,
            roll: pending.roll,
            from: pending.from,
            path: pending.path.clone(),
            landing,
            to: end,
        });

        let result = match landing {
            Some(landing) if end == Square::GOAL => {
                state.declare_winner(player);
                info!("{} wins on turn {}", state.name_of(player), state.turn_number());
                emit(state, sink, GameEvent::GameWon { player });
                return TurnOutcome {
                    player,
                    roll: pending.roll,
                    result: TurnResult::Won { landing },
                };
            }
            Some(landing) => TurnResult::Moved { landing },
            None => TurnResult::Stayed { at: end },
        };

        let next = state.advance_player();
        emit(state, sink, GameEvent::TurnAdvanced { next });
        TurnOutcome { player, roll: pending.roll, result }
    }
}

fn emit(state: &GameState, sink: &mut impl EventSink, event: GameEvent) {
    sink.on_event(state, &event);
}
