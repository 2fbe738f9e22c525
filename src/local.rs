//! Hill climbing. These only ever move to a strictly better neighbour and
//! stop at the first local optimum, so `None` means "stuck", not
//! "unsolvable".

use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use crate::board::{Board, Goal, Neighbors};
use crate::heuristic::manhattan_distance;
use crate::path::PathMap;
use crate::solver::Stats;

/// First improvement: scans the neighbours in a freshly shuffled order and
/// takes the first one that is strictly better.
pub fn hill_simple<R: Rng + ?Sized>(
    start: &Board,
    goal: &Goal,
    rng: &mut R,
    stats: &mut Stats,
) -> Option<Vec<Board>> {
    climb(start, goal, stats, |current_h, children| {
        children.shuffle(&mut *rng);
        children
            .iter()
            .copied()
            .find(|c| manhattan_distance(c, goal) < current_h)
    })
}

/// Steepest ascent: takes the best neighbour, first in the fixed order on
/// ties, if it is strictly better.
pub fn hill_steepest(start: &Board, goal: &Goal, stats: &mut Stats) -> Option<Vec<Board>> {
    climb(start, goal, stats, |current_h, children| {
        children
            .iter()
            .map(|c| (manhattan_distance(c, goal), *c))
            .min_by_key(|&(h, _)| h)
            .filter(|&(h, _)| h < current_h)
            .map(|(_, next)| next)
    })
}

/// Stochastic: picks among the strictly better neighbours at random, each
/// weighted by how much it improves on the current board.
pub fn hill_stochastic<R: Rng + ?Sized>(
    start: &Board,
    goal: &Goal,
    rng: &mut R,
    stats: &mut Stats,
) -> Option<Vec<Board>> {
    climb(start, goal, stats, |current_h, children| {
        let improving: SmallVec<[(Board, u32); 4]> = children
            .iter()
            .filter_map(|c| {
                let h = manhattan_distance(c, goal);
                (h < current_h).then(|| (*c, current_h - h))
            })
            .collect();

        // fails only when nothing improves
        improving
            .choose_weighted(&mut *rng, |&(_, gain)| gain)
            .ok()
            .map(|&(next, _)| next)
    })
}

// Shared loop. `step` sees the heuristic of the current board and its
// children, and returns the board to move to, or `None` when stuck.
fn climb<F>(start: &Board, goal: &Goal, stats: &mut Stats, mut step: F) -> Option<Vec<Board>>
where
    F: FnMut(u32, &mut Neighbors) -> Option<Board>,
{
    let mut paths = PathMap::rooted(*start);
    let mut current = *start;

    loop {
        if goal.is_goal(&current) {
            return Some(paths.reconstruct(current));
        }

        let current_h = manhattan_distance(&current, goal);
        let mut children = current.neighbors();
        stats.expanded += 1;
        stats.generated += children.len();

        let next = step(current_h, &mut children)?;
        paths.discover(next, current);
        current = next;
    }
}
