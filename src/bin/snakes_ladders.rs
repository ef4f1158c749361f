//! Terminal front end.
//! Usage: cargo run --bin snakes-ladders -- --players 3 --names Ann,Ben,Cat

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use snakes_ladders::core::{GameConfig, GameRng, PacingConfig, SleepPacer};
use snakes_ladders::events::{EventSink, GameEvent};
use snakes_ladders::render::{render_board, render_roster};
use snakes_ladders::session::GameSession;
use snakes_ladders::{BoardTopology, GameState, RollSource};

#[derive(Parser, Debug)]
#[command(name = "snakes-ladders")]
#[command(about = "Snakes & Ladders in the terminal")]
struct Cli {
    /// Number of players (1-10)
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Comma-separated player names
    #[arg(short, long, value_delimiter = ',')]
    names: Vec<String>,

    /// Dice seed, for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip animation pauses
    #[arg(long)]
    fast: bool,

    /// Roll automatically until someone wins
    #[arg(long)]
    auto: bool,
}

/// Prints the move log and the walk as it happens.
struct Terminal {
    topology: BoardTopology,
}

impl EventSink for Terminal {
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::PlayerStepped { player, position } => {
                print!("\r  {} -> {:<3}", state.name_of(*player), position);
                let _ = io::stdout().flush();
            }
            GameEvent::PlayerMoved { .. } => {
                println!();
                print_line(state, event);
            }
            GameEvent::GameStarted { .. } | GameEvent::GameWon { .. } => {
                print_line(state, event);
                print!("{}", render_board(state, &self.topology));
                print!("{}", render_roster(state));
            }
            _ => print_line(state, event),
        }
    }
}

fn print_line(state: &GameState, event: &GameEvent) {
    if let Some(line) = event.describe(state) {
        println!("{}", line);
    }
}

/// Cosmetic dice tumble, drawn from its own RNG stream.
fn tumble(flicker: &mut GameRng, pacing: &PacingConfig) {
    if pacing.roll_ms == 0 {
        return;
    }
    let frame = Duration::from_millis(pacing.roll_frame_ms.max(1));
    let started = Instant::now();
    while started.elapsed() < Duration::from_millis(pacing.roll_ms) {
        print!("\r  rolling... {}", flicker.roll());
        let _ = io::stdout().flush();
        thread::sleep(frame);
    }
    print!("\r                \r");
}

/// Read stdin on its own thread so a reset can land mid-move.
///
/// While `moving` is set, `r` goes to the pacer's abort channel and every
/// other line is dropped. Otherwise lines are forwarded as commands.
fn spawn_input(moving: Arc<AtomicBool>, abort: Sender<()>) -> Receiver<String> {
    let (commands, received) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let line = line.trim().to_string();
            if moving.load(Ordering::SeqCst) {
                if line == "r" && abort.send(()).is_err() {
                    break;
                }
            } else if commands.send(line).is_err() {
                break;
            }
        }
    });
    received
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.fast {
        config = config.with_pacing(PacingConfig::instant());
    }

    let dice = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("dice seed {}", dice.seed());
    let mut flicker = dice.for_context("flicker");
    let pacing = config.pacing.clone();
    let mut terminal = Terminal { topology: config.topology.clone() };
    let (abort, abort_requests) = mpsc::channel();
    let pacer = SleepPacer::new(pacing.clone()).with_abort(abort_requests);
    let mut session = GameSession::with_parts(config.clone(), dice, pacer);
    let moving = Arc::new(AtomicBool::new(false));
    let commands = spawn_input(Arc::clone(&moving), abort);

    session.start_game(cli.names.as_slice(), cli.players, &mut terminal)?;

    if cli.auto {
        // Stops at a win, or when `r` resets the game mid-move
        moving.store(true, Ordering::SeqCst);
        while session.engine().can_roll(session.state()) {
            tumble(&mut flicker, &pacing);
            session.roll_and_move(&mut terminal)?;
        }
        return Ok(());
    }

    println!("Enter: roll   s: new game   r: reset (also mid-move)   q: quit");
    for line in commands.iter() {
        match line.as_str() {
            "" => {
                if !session.engine().can_roll(session.state()) {
                    println!("No roll possible. Press s to start a new game.");
                    continue;
                }
                moving.store(true, Ordering::SeqCst);
                tumble(&mut flicker, &pacing);
                let outcome = session.roll_and_move(&mut terminal);
                moving.store(false, Ordering::SeqCst);
                session.pacer_mut().discard_pending_aborts();
                outcome?;

                if session.engine().can_roll(session.state()) {
                    print!("{}", render_board(session.state(), &config.topology));
                }
            }
            "s" => session.start_game(cli.names.as_slice(), cli.players, &mut terminal)?,
            "r" => session.reset_game(&mut terminal),
            "q" => break,
            other => println!("Unknown command {:?}", other),
        }
    }

    Ok(())
}
