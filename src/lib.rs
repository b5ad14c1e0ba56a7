// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

//! State-space primitives for the sliding-tile N-puzzle: the board
//! value object, successor generation, solvability and goal testing,
//! and the heuristics and priority orderings an external best-first
//! search driver plugs into its frontier.
//!
//! The search loop itself lives outside this crate - see
//! `tests/astar.rs` for a reference driver.

pub mod board;
pub mod data;
pub mod heuristic;
pub mod priority;
pub mod solvability;

mod vec2d;

pub use crate::board::{Board, BoardErr, MAX_SIZE};
pub use crate::data::{Dir, Pos, Tile, DIRECTIONS};
pub use crate::heuristic::{hamming, manhattan};
pub use crate::priority::Priority;
pub use crate::solvability::{is_solvable, SolvabilityErr};
