use thiserror::Error;

use crate::board::Player;

/// Errors returned by the board and the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Position outside `(1, 1)..=(size, size)`
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("board size {size} is too small")]
    InvalidBoardSize { size: usize },

    #[error("a game needs at least 2 players (got {players})")]
    InvalidPlayerCount { players: u32 },

    #[error("turn {turn} is not a player in a {players}-player game")]
    InvalidTurn { turn: u32, players: u32 },

    #[error("grid has {rows} rows, expected {expected}")]
    GridRows { rows: usize, expected: usize },

    #[error("grid row {row} has {len} cells, expected {expected}")]
    GridColumns {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Cell value that is not a player of this game (grid coordinates are 0-indexed)
    #[error("grid cell [{row}][{col}] holds {value}, which is not a player")]
    InvalidCell {
        row: usize,
        col: usize,
        value: Player,
    },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("the game is over")]
    GameOver,
}
