//! The rules engine: move legality, captures, ko history, passing and loading.
//!
//! A [`GameState`] owns its [`Board`] and every snapshot it needs for ko
//! checks. It has no interior mutability, so a clone is a fully independent
//! game; [`GameState::simulate_move`] relies on that to explore hypothetical
//! plies without touching the original.
//!
//! Positions are 1-indexed `(row, col)` pairs everywhere except [`GameState::grid`]
//! and [`GameState::load_game`], which use 0-indexed nested rows.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::board::{Board, Grid, Player, Pos};
use crate::constants::{MIN_BOARD_SIZE, MIN_PLAYERS};
use crate::error::GameError;
use crate::scoring;

/// Which repetition rule `legal_move` enforces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum KoRule {
    /// A move may not recreate the position from two plies ago.
    #[default]
    Simple,
    /// A move may not recreate any position recorded since the game started or was loaded.
    Superko,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    players: Player,
    /// Player to move
    turn: Player,
    ko_rule: KoRule,
    consecutive_passes: u32,
    /// Board after each applied move, oldest first
    history: Vec<Board>,
}

impl GameState {
    /// Start an empty game. Player 1 moves first.
    pub fn new(size: usize, players: Player, ko_rule: KoRule) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize { size });
        }
        if players < MIN_PLAYERS {
            return Err(GameError::InvalidPlayerCount { players });
        }
        Ok(Self {
            board: Board::new(size),
            players,
            turn: 1,
            ko_rule,
            consecutive_passes: 0,
            history: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn players(&self) -> Player {
        self.players
    }

    /// Player to move. Not meaningful once the game is done.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn ko_rule(&self) -> KoRule {
        self.ko_rule
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Copy of the board as 0-indexed rows: `grid()[r][c]` is `piece_at((r + 1, c + 1))`.
    pub fn grid(&self) -> Grid {
        self.board.rows()
    }

    /// Every empty position in row-major order, or nothing once the game is done.
    ///
    /// Ko is not considered here; see [`GameState::legal_moves`].
    pub fn available_moves(&self) -> Vec<Pos> {
        if self.done() {
            return Vec::new();
        }
        self.board
            .positions()
            .filter(|&pos| self.board.at(pos).is_none())
            .collect()
    }

    /// The available moves that also pass the ko rule.
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.available_moves()
            .into_iter()
            .filter(|&pos| self.legal_move(pos).unwrap_or(false))
            .collect()
    }

    /// True once every player has passed in a row.
    pub fn done(&self) -> bool {
        self.consecutive_passes >= self.players
    }

    /// Players tied for the best score once the game is done; empty before that.
    pub fn outcome(&self) -> Vec<Player> {
        if !self.done() {
            return Vec::new();
        }
        scoring::leaders(&self.scores())
    }

    pub fn piece_at(&self, pos: Pos) -> Result<Option<Player>, GameError> {
        self.board.get(pos)
    }

    /// Whether the player to move may place a stone at `pos`.
    ///
    /// # Errors
    /// `OutOfBounds` if `pos` is not on the board.
    pub fn legal_move(&self, pos: Pos) -> Result<bool, GameError> {
        if self.board.get(pos)?.is_some() || self.done() {
            return Ok(false);
        }
        let repeats = match self.ko_rule {
            KoRule::Simple => self.would_violate_ko(pos)?,
            KoRule::Superko => self.would_violate_superko(pos)?,
        };
        if repeats {
            debug!(
                "player {} at {pos:?} repeats a previous position ({:?})",
                self.turn, self.ko_rule
            );
        }
        Ok(!repeats)
    }

    /// True if playing `pos` recreates the position from two plies ago.
    pub fn would_violate_ko(&self, pos: Pos) -> Result<bool, GameError> {
        let after = self.board_after(pos)?;
        let n = self.history.len();
        Ok(n >= 2 && after == self.history[n - 2])
    }

    /// True if playing `pos` recreates any recorded position.
    pub fn would_violate_superko(&self, pos: Pos) -> Result<bool, GameError> {
        let after = self.board_after(pos)?;
        Ok(self.history.iter().any(|past| *past == after))
    }

    /// Stones plus exclusive territory for every player.
    pub fn scores(&self) -> BTreeMap<Player, usize> {
        scoring::scores(&self.board, self.players)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Place the current player's stone at `pos` and resolve captures.
    ///
    /// Ko is not re-checked; callers are expected to consult `legal_move`.
    ///
    /// # Errors
    /// - `OutOfBounds` if `pos` is not on the board
    /// - `Occupied` if a stone is already there
    /// - `GameOver` if every player has passed
    pub fn apply_move(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.board.get(pos)?.is_some() {
            return Err(GameError::Occupied {
                row: pos.0,
                col: pos.1,
            });
        }
        if self.done() {
            return Err(GameError::GameOver);
        }

        let mover = self.turn;
        let captured = play_stone(&mut self.board, pos, mover);
        if captured > 0 {
            debug!("player {mover} at {pos:?} removed {captured} stones");
        }

        self.consecutive_passes = 0;
        self.turn = self.next_turn();
        self.history.push(self.board.clone());
        Ok(())
    }

    /// Pass. The game ends once every player has passed consecutively.
    pub fn pass_turn(&mut self) {
        self.turn = self.next_turn();
        self.consecutive_passes += 1;
        if self.done() {
            debug!("all {} players passed, game over", self.players);
        }
    }

    /// Replace the position with `grid` (0-indexed rows) and set the player to move.
    ///
    /// Ko history restarts from the loaded board. Nothing changes if the input
    /// is rejected.
    ///
    /// # Errors
    /// `InvalidTurn`, `GridRows`, `GridColumns` or `InvalidCell`.
    pub fn load_game(&mut self, turn: Player, grid: &[Vec<Option<Player>>]) -> Result<(), GameError> {
        let players = self.players;
        if !(1..=players).contains(&turn) {
            return Err(GameError::InvalidTurn { turn, players });
        }
        let size = self.board.size();
        if grid.len() != size {
            return Err(GameError::GridRows {
                rows: grid.len(),
                expected: size,
            });
        }

        let mut board = Board::new(size);
        for (r, row) in grid.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::GridColumns {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &cell) in row.iter().enumerate() {
                if let Some(value) = cell {
                    if !(1..=players).contains(&value) {
                        return Err(GameError::InvalidCell { row: r, col: c, value });
                    }
                }
                board.set((r + 1, c + 1), cell)?;
            }
        }

        self.board = board;
        self.turn = turn;
        self.consecutive_passes = 0;
        self.history = vec![self.board.clone()];
        debug!("loaded {size}x{size} position, player {turn} to move");
        Ok(())
    }

    /// A copy of this game advanced by one ply: a stone at `pos`, or a pass for `None`.
    ///
    /// The receiver is left untouched. The copy carries its own history, so
    /// chained simulations keep enforcing ko.
    ///
    /// # Errors
    /// As [`GameState::apply_move`].
    pub fn simulate_move(&self, pos: Option<Pos>) -> Result<GameState, GameError> {
        let mut next = self.clone();
        match pos {
            Some(p) => next.apply_move(p)?,
            None => next.pass_turn(),
        }
        trace!("simulated {pos:?} for player {}", self.turn);
        Ok(next)
    }

    fn next_turn(&self) -> Player {
        (self.turn % self.players) + 1
    }

    /// The board that placing the mover's stone at `pos` would produce.
    fn board_after(&self, pos: Pos) -> Result<Board, GameError> {
        self.board.get(pos)?;
        let mut scratch = self.board.clone();
        play_stone(&mut scratch, pos, self.turn);
        Ok(scratch)
    }
}

/// Put `mover`'s stone at `pos` (on the board) and clear every group left
/// without liberties. Returns the number of stones removed.
///
/// Other players' groups around `pos` are resolved first so a capturing move
/// is never mistaken for suicide; the mover's own group is checked last.
fn play_stone(board: &mut Board, pos: Pos, mover: Player) -> usize {
    board.put(pos, mover);

    let around: Vec<Pos> = board.neighbors(pos).collect();
    let mut removed = 0;
    for n in around {
        if matches!(board.at(n), Some(p) if p != mover) {
            removed += remove_if_dead(board, n);
        }
    }
    removed + remove_if_dead(board, pos)
}

/// Clear the group at `start` if it has no liberties. Returns the stones removed.
fn remove_if_dead(board: &mut Board, start: Pos) -> usize {
    if board.at(start).is_none() {
        return 0;
    }
    let (stones, liberties) = collect_group(board, start);
    if liberties > 0 {
        return 0;
    }
    for &pt in &stones {
        board.clear(pt);
    }
    stones.len()
}

/// Flood-fill the group containing the stone at `start`.
///
/// Returns its stones and the number of distinct empty points touching it.
fn collect_group(board: &Board, start: Pos) -> (Vec<Pos>, usize) {
    let color = board.at(start);
    let cells = board.size() * board.size();
    let mut visited = vec![false; cells];
    let mut liberty_visited = vec![false; cells];
    let mut stack = vec![start];
    let mut stones = Vec::new();
    let mut libs = 0;
    visited[board.index_of(start)] = true;

    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in board.neighbors(pt) {
            let ni = board.index_of(n);
            match board.at(n) {
                None => {
                    if !liberty_visited[ni] {
                        liberty_visited[ni] = true;
                        libs += 1;
                    }
                }
                c if c == color && !visited[ni] => {
                    visited[ni] = true;
                    stack.push(n);
                }
                _ => {}
            }
        }
    }
    (stones, libs)
}
