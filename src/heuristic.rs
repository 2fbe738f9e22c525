use itertools::Itertools;

use crate::board::{Board, Goal, SIDE};

/// Sum over every tile (not the blank) of its grid distance to the cell it
/// occupies in `goal`.
///
/// A move shifts exactly one tile by one cell, so the value changes by
/// exactly one per move: it never overestimates and is consistent.
pub fn manhattan_distance(board: &Board, goal: &Goal) -> u32 {
    (0..SIDE)
        .cartesian_product(0..SIDE)
        .filter(|&pos| board[pos] != 0)
        .map(|(i, j)| {
            let (ti, tj) = goal.target(board[(i, j)]);
            (i.abs_diff(ti) + j.abs_diff(tj)) as u32
        })
        .sum()
}
