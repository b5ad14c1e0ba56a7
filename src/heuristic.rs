//! Distance-to-goal estimates used to order the search frontier.
//! Both are 0 exactly at the goal.

use crate::board::Board;
use crate::data::Pos;

/// Number of non-blank tiles out of place.
pub fn hamming(board: &Board) -> u32 {
    let size = board.dimension();
    let mut out_of_place = 0;
    for r in 0..size {
        for c in 0..size {
            let pos = Pos::new(r, c);
            let v = board.tile(pos);
            if v != 0 && v != board.goal_value(pos) {
                out_of_place += 1;
            }
        }
    }
    out_of_place
}

/// Sum over non-blank tiles of the grid-step distance from the tile's
/// current position to its goal position.
pub fn manhattan(board: &Board) -> u32 {
    let size = board.dimension();
    let mut sum = 0;
    for r in 0..size {
        for c in 0..size {
            let v = board.tile(Pos::new(r, c));
            if v != 0 {
                let target = Pos::new((v - 1) / size, (v - 1) % size);
                sum += Pos::new(r, c).dist(target);
            }
        }
    }
    sum
}
