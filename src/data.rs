use std::fmt::{self, Display, Formatter};

/// A tile value. 0 is the blank.
pub type Tile = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Grid-step (taxicab) distance to `other`.
    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

/// Direction the blank slides in - `Up` moves the blank towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed enumeration order for neighbor generation.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}
