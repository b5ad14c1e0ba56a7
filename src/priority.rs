use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use crate::board::Board;
use crate::heuristic::{hamming, manhattan};

/// The two frontier orderings an external best-first driver can pick.
/// A closed choice - no other orderings exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// `manhattan + moves_taken`, the A* cost function.
    Manhattan,
    /// `hamming` alone - greedy, ignores path cost.
    Hamming,
}

impl Priority {
    /// The key boards are ordered by, ascending - smaller is better.
    pub fn eval(self, board: &Board) -> u32 {
        match self {
            Priority::Manhattan => manhattan(board) + board.moves_taken(),
            Priority::Hamming => hamming(board),
        }
    }

    /// Total over all boards and never panics. Equal keys compare
    /// `Equal` - tie-breaking is the driver's concern.
    pub fn cmp(self, a: &Board, b: &Board) -> Ordering {
        self.eval(a).cmp(&self.eval(b))
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Priority::Manhattan => write!(f, "manhattan-priority"),
            Priority::Hamming => write!(f, "hamming-priority"),
        }
    }
}
