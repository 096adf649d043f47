//! Area scoring: stones on the board plus exclusively-bordered territory.
//!
//! Empty cells are partitioned into maximal orthogonally-connected regions.
//! A region whose border touches exactly one player's stones is that
//! player's territory. A region touching several players, or none at all,
//! is a neutral zone and scores for nobody.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Board, Player, Pos};

/// A maximal connected region of empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub cells: Vec<Pos>,
    /// The single bordering player, or `None` for a neutral zone
    pub owner: Option<Player>,
}

/// Partition every empty cell of `board` into regions.
///
/// Regions are returned in the row-major order of their first cell. Every
/// empty cell belongs to exactly one region.
pub fn regions(board: &Board) -> Vec<Region> {
    let mut visited = vec![false; board.size() * board.size()];
    let mut out = Vec::new();

    for start in board.positions() {
        if board.at(start).is_some() || visited[board.index_of(start)] {
            continue;
        }
        out.push(grow_region(board, start, &mut visited));
    }
    out
}

/// Flood-fill the empty region containing `start`, marking cells in `visited`.
fn grow_region(board: &Board, start: Pos, visited: &mut [bool]) -> Region {
    let mut stack = vec![start];
    let mut cells = Vec::new();
    let mut border: BTreeSet<Player> = BTreeSet::new();
    visited[board.index_of(start)] = true;

    while let Some(pt) = stack.pop() {
        cells.push(pt);
        for n in board.neighbors(pt) {
            match board.at(n) {
                Some(p) => {
                    border.insert(p);
                }
                None => {
                    let i = board.index_of(n);
                    if !visited[i] {
                        visited[i] = true;
                        stack.push(n);
                    }
                }
            }
        }
    }

    let owner = match border.len() {
        1 => border.first().copied(),
        _ => None,
    };
    Region { cells, owner }
}

/// Score every player `1..=players`: stones plus exclusive territory.
pub fn scores(board: &Board, players: Player) -> BTreeMap<Player, usize> {
    let mut scores: BTreeMap<Player, usize> =
        (1..=players).map(|p| (p, board.stones(p))).collect();

    for region in regions(board) {
        if let Some(owner) = region.owner {
            if let Some(s) = scores.get_mut(&owner) {
                *s += region.cells.len();
            }
        }
    }
    scores
}

/// All players sharing the highest score, ascending.
pub fn leaders(scores: &BTreeMap<Player, usize>) -> Vec<Player> {
    let Some(&best) = scores.values().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .filter(|&(_, &s)| s == best)
        .map(|(&p, _)| p)
        .collect()
}
