use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use log::debug;

use crate::data::{Dir, Pos, Tile, DIRECTIONS};
use crate::vec2d::Vec2d;

/// Largest supported dimension - keeps every tile value within a `Tile`.
pub const MAX_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    Empty,
    TooLarge,
    NotSquare,
    ValueOutOfRange(Tile),
    DuplicateValue(Tile),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::Empty => write!(f, "Empty grid"),
            BoardErr::TooLarge => write!(f, "Grid larger than {0}x{0}", MAX_SIZE),
            BoardErr::NotSquare => write!(f, "Grid is not square"),
            BoardErr::ValueOutOfRange(v) => write!(f, "Value out of range: {}", v),
            BoardErr::DuplicateValue(v) => write!(f, "Duplicate value: {}", v),
        }
    }
}

impl Error for BoardErr {}

/// A sliding-puzzle position: a square grid holding a permutation of
/// `0..dimension²` with 0 as the blank, plus the number of moves taken
/// to reach it. The move count is path metadata - it takes no part in
/// equality or hashing, so two paths reaching the same tile arrangement
/// collapse into one state.
///
/// Boards are value objects. Every transformation allocates a fresh
/// grid; a board is never mutated after construction.
#[derive(Clone)]
pub struct Board {
    grid: Vec2d<Tile>,
    blank: Pos,
    moves: u32,
}

impl Board {
    /// Validates shape and contents. The values must be a permutation of
    /// `0..dimension²` - exactly one blank follows from that.
    pub fn new(rows: &[Vec<Tile>]) -> Result<Board, BoardErr> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardErr::Empty);
        }
        if size > MAX_SIZE {
            return Err(BoardErr::TooLarge);
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(BoardErr::NotSquare);
        }

        let cells = size * size;
        let mut seen = vec![false; cells];
        let mut blank = Pos::new(0, 0);
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if usize::from(v) >= cells {
                    return Err(BoardErr::ValueOutOfRange(v));
                }
                if seen[usize::from(v)] {
                    return Err(BoardErr::DuplicateValue(v));
                }
                seen[usize::from(v)] = true;
                if v == 0 {
                    blank = Pos::new(r as u8, c as u8);
                }
            }
        }

        debug!("validated {0}x{0} board, blank at {1}", size, blank);
        Ok(Board {
            grid: Vec2d::new(rows),
            blank,
            moves: 0,
        })
    }

    /// The solved arrangement: tiles in row-major order, blank last.
    pub fn goal(dimension: u8) -> Result<Board, BoardErr> {
        let size = usize::from(dimension);
        if size == 0 {
            return Err(BoardErr::Empty);
        }
        if size > MAX_SIZE {
            return Err(BoardErr::TooLarge);
        }

        let mut rows = Vec::with_capacity(size);
        for r in 0..size {
            let row = (0..size)
                .map(|c| ((r * size + c + 1) % (size * size)) as Tile)
                .collect();
            rows.push(row);
        }
        Ok(Board {
            grid: Vec2d::new(&rows),
            blank: Pos::new(dimension - 1, dimension - 1),
            moves: 0,
        })
    }

    pub fn dimension(&self) -> u8 {
        self.grid.size()
    }

    /// Path length accumulated so far - cost bookkeeping for search.
    pub fn moves_taken(&self) -> u32 {
        self.moves
    }

    pub fn tile(&self, pos: Pos) -> Tile {
        self.grid[pos]
    }

    pub fn blank_pos(&self) -> Pos {
        self.blank
    }

    /// The value `pos` holds in the solved arrangement.
    pub(crate) fn goal_value(&self, pos: Pos) -> Tile {
        let size = self.dimension();
        if pos.r == size - 1 && pos.c == size - 1 {
            0
        } else {
            (u16::from(pos.r) * u16::from(size) + u16::from(pos.c) + 1) as Tile
        }
    }

    pub fn is_goal(&self) -> bool {
        let size = self.dimension();
        for r in 0..size {
            for c in 0..size {
                let pos = Pos::new(r, c);
                let v = self.grid[pos];
                if v != 0 && v != self.goal_value(pos) {
                    return false;
                }
            }
        }
        true
    }

    /// The successor with the blank moved one cell in `dir`, `None` when
    /// that would leave the grid. The swap happens on a fresh copy - the
    /// parent grid is never touched, so boards stay safe to share.
    pub fn slide(&self, dir: Dir) -> Option<Board> {
        let (dr, dc) = dir.offset();
        let (r, c) = (i32::from(self.blank.r) + dr, i32::from(self.blank.c) + dc);
        let size = i32::from(self.dimension());
        if r < 0 || c < 0 || r >= size || c >= size {
            return None;
        }

        let target = Pos::new(r as u8, c as u8);
        let mut grid = self.grid.clone();
        grid[self.blank] = grid[target];
        grid[target] = 0;
        Some(Board {
            grid,
            blank: target,
            moves: self.moves + 1,
        })
    }

    /// All legal successors in the fixed order up, down, left, right.
    /// A corner blank yields 2, an edge blank 3, an interior blank 4.
    pub fn neighbors(&self) -> Vec<Board> {
        DIRECTIONS.iter().filter_map(|&dir| self.slide(dir)).collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // grid only, consistent with PartialEq
        self.grid.hash(state);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
