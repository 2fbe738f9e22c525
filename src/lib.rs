//! Search strategies for the 8-puzzle.
//!
//! A [`Board`] is a 3×3 arrangement of the tiles 1-8 and a blank. The
//! [`Solver`] runs one of ten [`Algorithm`]s from a start board towards a
//! [`Goal`] and reports the path it found (if any), how long it took and
//! how many boards it touched.
//!
//! ```
//! use eight_puzzle::{Algorithm, Board, Solver};
//!
//! let start: Board = "123456708".parse().unwrap();
//! let solution = Solver::seeded(0).solve(&start, Algorithm::AStar).unwrap();
//! assert_eq!(solution.moves(), Some(1));
//! ```

pub mod board;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod informed;
pub mod local;
pub mod path;
pub mod solver;
pub mod uninformed;

pub use board::{Board, Direction, Goal};
pub use error::Error;
pub use heuristic::manhattan_distance;
pub use path::is_valid_path;
pub use solver::{Algorithm, Limits, Solution, Solver, Stats};
