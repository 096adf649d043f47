//! Bot move selection.
//!
//! Bots never touch the live game: they look ahead with
//! [`GameState::simulate_move`] and return the move they want played, or
//! `None` to pass.

use clap::ValueEnum;
use fastrand::Rng;

use crate::board::Pos;
use crate::game::GameState;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Uniformly random legal move
    Random,
    /// Two-ply lookahead on the mover's average score
    Smart,
    /// Corners first, then edges, then `smart`
    Heuristic,
}

impl Strategy {
    /// Pick a move for the player to move, or `None` to pass.
    pub fn choose(self, game: &GameState, rng: &mut Rng) -> Option<Pos> {
        match self {
            Strategy::Random => random_move(game, rng),
            Strategy::Smart => smart_move(game, rng),
            Strategy::Heuristic => heuristic_move(game, rng),
        }
    }
}

pub fn random_move(game: &GameState, rng: &mut Rng) -> Option<Pos> {
    let moves = game.legal_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Score each legal move by the mover's mean score over every reply.
///
/// A move with no replies is worth 0. Ties keep the earliest move in
/// row-major order.
pub fn smart_move(game: &GameState, rng: &mut Rng) -> Option<Pos> {
    let me = game.turn();
    let mut best: Option<(Pos, f64)> = None;

    for mv in game.legal_moves() {
        let Ok(child) = game.simulate_move(Some(mv)) else {
            continue;
        };
        let replies = child.available_moves();
        let value = if replies.is_empty() {
            0.0
        } else {
            let total: usize = replies
                .iter()
                .filter_map(|&reply| child.simulate_move(Some(reply)).ok())
                .map(|g| g.scores().get(&me).copied().unwrap_or(0))
                .sum();
            total as f64 / replies.len() as f64
        };
        if best.is_none_or(|(_, v)| value > v) {
            best = Some((mv, value));
        }
    }

    best.map(|(mv, _)| mv).or_else(|| random_move(game, rng))
}

/// Take a corner if one is free, else the free edge point closest to a
/// corner, else fall back to [`smart_move`].
pub fn heuristic_move(game: &GameState, rng: &mut Rng) -> Option<Pos> {
    let n = game.size();
    let legal = game.legal_moves();

    let corners: Vec<Pos> = [(1, 1), (1, n), (n, 1), (n, n)]
        .into_iter()
        .filter(|c| legal.contains(c))
        .collect();
    if !corners.is_empty() {
        return Some(corners[rng.usize(..corners.len())]);
    }

    let edge = legal
        .iter()
        .copied()
        .filter(|&p| on_edge(p, n))
        .min_by_key(|&p| corner_distance(p, n));
    if edge.is_some() {
        return edge;
    }

    smart_move(game, rng)
}

fn on_edge((row, col): Pos, n: usize) -> bool {
    row == 1 || col == 1 || row == n || col == n
}

/// Manhattan distance to the nearest corner.
fn corner_distance((row, col): Pos, n: usize) -> usize {
    (row - 1).min(n - row) + (col - 1).min(n - col)
}
