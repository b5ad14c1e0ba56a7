//! A reference best-first driver exercising the crate the way a real
//! solver would: a binary-heap frontier ordered by a `Priority`, a hash
//! set of already expanded boards, insertion order as the tie-break.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashSet;

use npuzzle::{is_solvable, Board, Priority, Tile};

struct SearchNode {
    board: Board,
    key: u32,
    // insertion order, breaks ties between equal keys
    seq: u64,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        (self.key, self.seq) == (other.key, other.seq)
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.key, other.seq).cmp(&(self.key, self.seq))
    }
}

/// Returns the goal board reached from `start`, carrying the number of
/// moves taken, or `None` when the start is known unreachable.
fn solve(start: &Board, priority: Priority) -> Option<Board> {
    let _ = env_logger::try_init();

    // the parity oracle is only defined for odd dimensions
    if start.dimension() % 2 == 1 && !is_solvable(start).unwrap() {
        return None;
    }

    let mut seq = 0;
    let mut expanded = FnvHashSet::default();
    let mut frontier = BinaryHeap::new();
    frontier.push(SearchNode {
        key: priority.eval(start),
        board: start.clone(),
        seq,
    });

    while let Some(node) = frontier.pop() {
        if node.board.is_goal() {
            return Some(node.board);
        }
        if !expanded.insert(node.board.clone()) {
            continue;
        }
        for neighbor in node.board.neighbors() {
            if !expanded.contains(&neighbor) {
                seq += 1;
                frontier.push(SearchNode {
                    key: priority.eval(&neighbor),
                    board: neighbor,
                    seq,
                });
            }
        }
    }
    None
}

fn board(rows: &[Vec<Tile>]) -> Board {
    Board::new(rows).unwrap()
}

// 4 slides from the goal, manhattan distance 4 - the optimum is exactly 4
fn scrambled_3x3() -> Board {
    board(&[vec![1, 2, 3], vec![4, 8, 5], vec![7, 6, 0]])
}

#[test]
fn manhattan_priority_finds_the_optimum() {
    let solved = solve(&scrambled_3x3(), Priority::Manhattan).unwrap();
    assert!(solved.is_goal());
    assert_eq!(solved.moves_taken(), 4);
}

#[test]
fn manhattan_priority_on_4x4() {
    // even dimension: the oracle is out of contract, the driver searches anyway
    let start = board(&[
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 15, 11],
        vec![13, 14, 12, 0],
    ]);
    let solved = solve(&start, Priority::Manhattan).unwrap();
    assert!(solved.is_goal());
    assert_eq!(solved.moves_taken(), 4);
}

#[test]
fn hamming_priority_reaches_the_goal() {
    // greedy ordering - not necessarily optimal, but it must get there
    let solved = solve(&scrambled_3x3(), Priority::Hamming).unwrap();
    assert!(solved.is_goal());
    assert!(solved.moves_taken() >= 4);
}

#[test]
fn unsolvable_is_rejected_without_searching() {
    let swapped = board(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]);
    assert_eq!(solve(&swapped, Priority::Manhattan), None);
    assert_eq!(solve(&swapped, Priority::Hamming), None);
}

#[test]
fn solved_input_needs_no_moves() {
    let solved = solve(&Board::goal(3).unwrap(), Priority::Manhattan).unwrap();
    assert_eq!(solved.moves_taken(), 0);
}
