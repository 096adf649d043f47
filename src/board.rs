//! Square board storage with 1-indexed, bounds-checked access.
//!
//! The board knows nothing about the rules: it stores an optional player id
//! per cell and hands out neighbours. Capture and scoring live in
//! [`crate::game`] and [`crate::scoring`].

use std::fmt;

use crate::error::GameError;

/// Player id. Players are numbered from 1.
pub type Player = u32;

/// A `(row, col)` position, 1-indexed: `(1, 1)` is the top-left corner.
pub type Pos = (usize, usize);

/// 0-indexed row-major cell contents, as returned by `grid()` and taken by `load_game`.
pub type Grid = Vec<Vec<Option<Player>>>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Pos) -> usize {
        (row - 1) * self.size + (col - 1)
    }

    fn check(&self, pos: Pos) -> Result<usize, GameError> {
        if !self.valid(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.0,
                col: pos.1,
                size: self.size,
            });
        }
        Ok(self.idx(pos))
    }

    /// True if `pos` lies on the board.
    #[inline]
    pub fn valid(&self, (row, col): Pos) -> bool {
        (1..=self.size).contains(&row) && (1..=self.size).contains(&col)
    }

    pub fn get(&self, pos: Pos) -> Result<Option<Player>, GameError> {
        let i = self.check(pos)?;
        Ok(self.cells[i])
    }

    /// Write a cell. Overwrites whatever was there.
    pub fn set(&mut self, pos: Pos, occupant: Option<Player>) -> Result<(), GameError> {
        let i = self.check(pos)?;
        self.cells[i] = occupant;
        Ok(())
    }

    /// Occupant of a position already known to be on the board.
    #[inline]
    pub(crate) fn at(&self, pos: Pos) -> Option<Player> {
        self.cells[self.idx(pos)]
    }

    #[inline]
    pub(crate) fn put(&mut self, pos: Pos, player: Player) {
        let i = self.idx(pos);
        self.cells[i] = Some(player);
    }

    #[inline]
    pub(crate) fn clear(&mut self, pos: Pos) {
        let i = self.idx(pos);
        self.cells[i] = None;
    }

    /// Dense index for visited bitmaps sized `size * size`.
    #[inline]
    pub(crate) fn index_of(&self, pos: Pos) -> usize {
        self.idx(pos)
    }

    /// On-board orthogonal neighbours, in the order up, right, down, left.
    pub fn neighbors(&self, (row, col): Pos) -> impl Iterator<Item = Pos> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 1 {
            v.push((row - 1, col));
        }
        if col < s {
            v.push((row, col + 1));
        }
        if row < s {
            v.push((row + 1, col));
        }
        if col > 1 {
            v.push((row, col - 1));
        }
        v.into_iter()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let s = self.size;
        (1..=s).flat_map(move |row| (1..=s).map(move |col| (row, col)))
    }

    /// Copy of the cells as 0-indexed rows.
    pub fn rows(&self) -> Grid {
        self.cells.chunks(self.size.max(1)).map(|r| r.to_vec()).collect()
    }

    /// Number of stones `player` has on the board.
    pub fn stones(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(p) => write!(f, "{p}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
