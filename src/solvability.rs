use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::board::Board;
use crate::data::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvabilityErr {
    /// The inversion-parity argument only holds for odd dimensions.
    EvenDimension,
}

impl Display for SolvabilityErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolvabilityErr::EvenDimension => {
                write!(f, "Solvability check is only defined for odd dimensions")
            }
        }
    }
}

impl Error for SolvabilityErr {}

/// Parity check of whether `board` is reachable from the goal, valid for
/// odd-dimension boards only.
///
/// Inversions are counted over the first `dimension² - 1` positions in
/// row-major order - the blank participates as value 0. The board is
/// solvable iff the count is even.
pub fn is_solvable(board: &Board) -> Result<bool, SolvabilityErr> {
    let size = usize::from(board.dimension());
    if size % 2 == 0 {
        return Err(SolvabilityErr::EvenDimension);
    }

    let value_at = |index: usize| {
        board.tile(Pos::new((index / size) as u8, (index % size) as u8))
    };

    let cells = size * size;
    let mut inversions = 0u32;
    for p in 0..cells - 1 {
        for q in p + 1..cells - 1 {
            if value_at(p) > value_at(q) {
                inversions += 1;
            }
        }
    }

    debug!("counted {} inversions", inversions);
    Ok(inversions % 2 == 0)
}

#[cfg(test)]
mod tests {
    use crate::data::Tile;

    use super::*;

    fn board(rows: &[Vec<Tile>]) -> Board {
        Board::new(rows).unwrap()
    }

    #[test]
    fn goal_is_solvable() {
        assert_eq!(is_solvable(&Board::goal(1).unwrap()), Ok(true));
        assert_eq!(is_solvable(&Board::goal(3).unwrap()), Ok(true));
        assert_eq!(is_solvable(&Board::goal(5).unwrap()), Ok(true));
    }

    #[test]
    fn one_swap_is_not() {
        // a single adjacent swap flips parity: 1 inversion
        let swapped = board(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]);
        assert_eq!(is_solvable(&swapped), Ok(false));
    }

    #[test]
    fn even_dimension_is_out_of_contract() {
        let even = board(&[vec![1, 2], vec![3, 0]]);
        assert_eq!(is_solvable(&even), Err(SolvabilityErr::EvenDimension));
    }
}
