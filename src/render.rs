//! Plain-text rendering for terminals.
//!
//! Each board row is two text lines: square numbers with ladder (`^`) or
//! snake (`v`) destinations, then the tokens standing on each square.

use std::fmt::Write;

use crate::board::{square_at, BoardTopology, Square, GRID_SIZE};
use crate::core::{GameState, PlayerId};

const CELL_WIDTH: usize = 7;

/// Draw the board with every token on it.
#[must_use]
pub fn render_board(state: &GameState, topology: &BoardTopology) -> String {
    let mut out = String::new();
    let rule = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(GRID_SIZE as usize));

    out.push_str(&rule);
    for row in 0..GRID_SIZE {
        let squares: Vec<Square> = (0..GRID_SIZE).filter_map(|col| square_at(row, col)).collect();

        out.push('|');
        for &square in &squares {
            let _ = write!(out, "{:<w$}|", square_label(square, topology), w = CELL_WIDTH);
        }
        out.push('\n');

        out.push('|');
        for &square in &squares {
            let _ = write!(out, "{:<w$}|", tokens_on(state, square), w = CELL_WIDTH);
        }
        out.push('\n');
        out.push_str(&rule);
    }
    out
}

/// One line per player: marker for the current player, label, name, square.
#[must_use]
pub fn render_roster(state: &GameState) -> String {
    let mut out = String::new();
    let current = state.current_player();
    for (id, player) in state.players().iter() {
        let marker = if Some(id) == current { '>' } else { ' ' };
        let square = state.position(id).map_or_else(|| "-".to_string(), |s| s.to_string());
        let _ = writeln!(
            out,
            "{} [{}] {} on {} ({})",
            marker,
            player.token_label(id),
            player.name,
            square,
            player.color
        );
    }
    out
}

fn square_label(square: Square, topology: &BoardTopology) -> String {
    if let Some(to) = topology.ladder_at(square) {
        format!("{:>3}^{}", square, to)
    } else if let Some(to) = topology.snake_at(square) {
        format!("{:>3}v{}", square, to)
    } else {
        format!("{:>3}", square)
    }
}

fn tokens_on(state: &GameState, square: Square) -> String {
    let labels: Vec<String> = state
        .positions()
        .iter()
        .filter(|&(_, &at)| at == square)
        .map(|(id, _)| label(state, id))
        .collect();

    let joined = labels.join(" ");
    if joined.chars().count() > CELL_WIDTH {
        // Too crowded to spell out
        format!(" x{}", labels.len())
    } else {
        joined
    }
}

fn label(state: &GameState, id: PlayerId) -> String {
    state.player(id).map_or_else(|| (id.index() + 1).to_string(), |p| p.token_label(id))
}
