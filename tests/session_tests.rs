//! Session integration tests.
//!
//! Start, roll and reset through `GameSession`, with scripted and seeded
//! dice, plus JSON configuration.

use snakes_ladders::board::{BoardTopology, Square};
use snakes_ladders::core::{
    FixedRolls, GameConfig, NoPacing, Pacer, Pacing, PacingConfig, Pause, PlayerId, SleepPacer,
    TurnPhase,
};
use snakes_ladders::events::{EventLog, GameEvent};
use snakes_ladders::rules::TurnResult;
use snakes_ladders::session::GameSession;
use snakes_ladders::{ConfigError, GameError};

fn sq(n: u8) -> Square {
    Square::new(n).unwrap()
}

fn scripted(rolls: &[u8]) -> GameSession<FixedRolls, NoPacing> {
    GameSession::with_parts(GameConfig::default(), FixedRolls::new(rolls.iter().copied()), NoPacing)
}

/// One player, a ladder from 2 to 99, and rolls of 1: wins on the second turn.
fn quick_win() -> GameSession<FixedRolls, NoPacing> {
    let topology = BoardTopology::builder().ladder(2, 99).build().unwrap();
    let config = GameConfig::default().with_topology(topology);
    GameSession::with_parts(config, FixedRolls::new([1]), NoPacing)
}

/// Aborts at the given pause, counting from zero.
struct AbortAt(usize);

impl Pacer for AbortAt {
    fn pause(&mut self, _pause: Pause) -> Pacing {
        if self.0 == 0 {
            return Pacing::Abort;
        }
        self.0 -= 1;
        Pacing::Continue
    }
}

// =============================================================================
// Starting
// =============================================================================

#[test]
fn test_start_seats_players() {
    let mut session = scripted(&[1]);
    let mut log = EventLog::new();

    session.start_game(&["Alice", "", "  Cat  "], 3, &mut log).unwrap();

    let state = session.state();
    assert_eq!(state.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(state.current_player(), Some(PlayerId::new(0)));
    assert_eq!(state.name_of(PlayerId::new(1)), "Player 2");
    assert_eq!(state.name_of(PlayerId::new(2)), "Cat");
    assert!(state.positions().values().all(|&s| s == Square::START));
    assert_eq!(log.events(), &[GameEvent::GameStarted { player_count: 3 }]);
}

#[test]
fn test_start_rejects_bad_counts() {
    let mut session = scripted(&[1]);
    let mut log = EventLog::new();
    let none: &[&str] = &[];

    for count in [0, 11] {
        let err = session.start_game(none, count, &mut log).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount { count, min: 1, max: 10 });
    }

    assert_eq!(session.state().phase(), TurnPhase::Idle);
    assert!(log.events().is_empty());
}

/// Limits built in code can narrow 1-10 but never widen it.
#[test]
fn test_start_ignores_limits_wider_than_board() {
    let config = GameConfig::default().with_player_limits(0, 20);
    let mut session = GameSession::with_parts(config, FixedRolls::new([1]), NoPacing);
    let mut log = EventLog::new();
    let none: &[&str] = &[];

    for count in [0, 15, 300] {
        let err = session.start_game(none, count, &mut log).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount { count, min: 1, max: 10 });
    }

    assert_eq!(session.state().phase(), TurnPhase::Idle);
    assert_eq!(session.state().current_player(), None);
    assert!(log.events().is_empty());
}

#[test]
fn test_start_over_finished_game() {
    let mut session = quick_win();
    let mut log = EventLog::new();
    session.start_game(&["Solo"], 1, &mut log).unwrap();
    session.roll_and_move(&mut log).unwrap();
    session.roll_and_move(&mut log).unwrap();
    assert!(session.state().is_terminal());

    session.start_game(&["Ann", "Ben"], 2, &mut log).unwrap();

    assert_eq!(session.state().phase(), TurnPhase::AwaitingRoll);
    assert_eq!(session.state().winner(), None);
    assert_eq!(session.state().player_count(), 2);
    assert!(session.state().history().is_empty());
}

// =============================================================================
// Rolling
// =============================================================================

#[test]
fn test_roll_before_start_is_ignored() {
    let mut session = scripted(&[3]);
    let mut log = EventLog::new();

    assert_eq!(session.roll_and_move(&mut log).unwrap(), None);
    assert!(log.events().is_empty());
}

#[test]
fn test_scripted_turns() {
    let mut session = scripted(&[3, 5]);
    let mut log = EventLog::new();
    session.start_game(&["Alice", "Bob"], 2, &mut log).unwrap();

    let first = session.roll_and_move(&mut log).unwrap().unwrap();
    let second = session.roll_and_move(&mut log).unwrap().unwrap();

    assert_eq!(first.final_square(), Some(sq(14)));
    assert_eq!(second.player, PlayerId::new(1));
    assert_eq!(second.final_square(), Some(sq(6)));
    assert_eq!(session.state().current_player(), Some(PlayerId::new(0)));
}

#[test]
fn test_invalid_roll_from_source() {
    let dice = FixedRolls::new([7]);
    let mut session = GameSession::with_parts(GameConfig::default(), dice, NoPacing);
    let mut log = EventLog::new();
    session.start_game(&["Alice"], 1, &mut log).unwrap();
    log.clear();

    let err = session.roll_and_move(&mut log).unwrap_err();

    assert_eq!(err, GameError::InvalidRollValue { value: 7 });
    assert_eq!(session.state().phase(), TurnPhase::AwaitingRoll);
    assert!(log.events().is_empty());
}

/// A seeded game always ends, with the winner on 100 and every token on
/// the board.
#[test]
fn test_seeded_game_runs_to_completion() {
    let config = GameConfig::default().with_seed(7);
    let mut session = GameSession::new(config);
    let mut log = EventLog::new();
    session.start_game(&["A", "B", "C", "D"], 4, &mut log).unwrap();

    let mut turns = 0;
    while !session.state().is_terminal() && turns < 100_000 {
        assert!(session.roll_and_move(&mut log).unwrap().is_some());
        turns += 1;
    }

    let state = session.state().clone();
    let winner = state.winner().unwrap();
    assert_eq!(state.position(winner), Some(Square::GOAL));
    assert_eq!(state.history().len(), turns);
    assert_eq!(log.events().last(), Some(&GameEvent::GameWon { player: winner }));
    assert_eq!(session.roll_and_move(&mut log).unwrap(), None);

    for record in state.history() {
        assert!((1..=6).contains(&record.roll));
        assert!(record.path.len() <= usize::from(record.roll));
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut session = GameSession::new(GameConfig::default().with_seed(seed));
        session.start_game(&["A", "B"], 2, &mut ()).unwrap();
        for _ in 0..20 {
            session.roll_and_move(&mut ()).unwrap();
        }
        session.state().history().clone()
    };

    assert_eq!(play(42), play(42));
}

// =============================================================================
// Resetting
// =============================================================================

#[test]
fn test_reset_while_awaiting_roll() {
    let mut session = scripted(&[2]);
    let mut log = EventLog::new();
    session.start_game(&["Alice", "Bob"], 2, &mut log).unwrap();
    session.roll_and_move(&mut log).unwrap();
    log.clear();

    session.reset_game(&mut log);

    assert_eq!(session.state().phase(), TurnPhase::Idle);
    assert_eq!(session.state().player_count(), 0);
    assert_eq!(session.state().current_player(), None);
    assert_eq!(log.events(), &[GameEvent::GameReset]);
}

#[test]
fn test_reset_after_win() {
    let mut session = quick_win();
    let mut log = EventLog::new();
    session.start_game(&["Solo"], 1, &mut log).unwrap();
    session.roll_and_move(&mut log).unwrap();
    session.roll_and_move(&mut log).unwrap();
    assert!(session.state().is_terminal());

    session.reset_game(&mut log);

    assert_eq!(session.state().phase(), TurnPhase::Idle);
    assert_eq!(session.state().winner(), None);
    assert_eq!(session.roll_and_move(&mut log).unwrap(), None);
}

/// An aborting pacer resets the game partway through the walk.
#[test]
fn test_reset_while_moving() {
    let dice = FixedRolls::new([5]);
    let mut session = GameSession::with_parts(GameConfig::default(), dice, AbortAt(1));
    let mut log = EventLog::new();
    session.start_game(&["Alice", "Bob"], 2, &mut log).unwrap();
    log.clear();

    let outcome = session.roll_and_move(&mut log).unwrap().unwrap();

    assert_eq!(outcome.result, TurnResult::Abandoned);
    assert_eq!(log.steps(), vec![sq(2), sq(3)]);
    assert_eq!(log.events().last(), Some(&GameEvent::GameReset));
    assert_eq!(session.state().phase(), TurnPhase::Idle);
    assert!(session.state().positions().is_empty());
}

/// A reset requested while tokens are walking cancels the turn; one
/// requested between turns is dropped.
#[test]
fn test_reset_request_during_walk() {
    let (abort, requests) = std::sync::mpsc::channel();
    let pacer = SleepPacer::new(PacingConfig::instant()).with_abort(requests);
    let mut session = GameSession::with_parts(GameConfig::default(), FixedRolls::new([5]), pacer);
    let mut log = EventLog::new();

    abort.send(()).unwrap();
    session.pacer_mut().discard_pending_aborts();
    session.start_game(&["Alice", "Bob"], 2, &mut log).unwrap();
    let outcome = session.roll_and_move(&mut log).unwrap().unwrap();
    assert_eq!(outcome.final_square(), Some(sq(6)));

    log.clear();
    abort.send(()).unwrap();
    let outcome = session.roll_and_move(&mut log).unwrap().unwrap();

    assert_eq!(outcome.result, TurnResult::Abandoned);
    assert_eq!(log.steps(), vec![sq(2)]);
    assert_eq!(log.events().last(), Some(&GameEvent::GameReset));
    assert_eq!(session.state().phase(), TurnPhase::Idle);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_json_config_drives_session() {
    let json = r#"{
        "seed": 1,
        "max_players": 4,
        "topology": {
            "ladders": [{ "from": 3, "to": 50 }],
            "snakes": [{ "from": 60, "to": 10 }]
        }
    }"#;
    let config = GameConfig::from_json_str(json).unwrap();
    let mut session = GameSession::with_parts(config, FixedRolls::new([2]), NoPacing);
    let mut log = EventLog::new();

    let err = session.start_game(&["A"], 5, &mut log).unwrap_err();
    assert_eq!(err, GameError::InvalidPlayerCount { count: 5, min: 1, max: 4 });

    session.start_game(&["A"], 1, &mut log).unwrap();
    let outcome = session.roll_and_move(&mut log).unwrap().unwrap();
    assert_eq!(outcome.final_square(), Some(sq(50)));
    assert_eq!(session.engine().topology().snake_at(sq(60)), Some(sq(10)));
}

#[test]
fn test_json_config_rejects_bad_board() {
    let json = r#"{ "topology": { "ladders": [{ "from": 30, "to": 20 }] } }"#;

    assert!(matches!(GameConfig::from_json_str(json), Err(ConfigError::Json(_))));
}
