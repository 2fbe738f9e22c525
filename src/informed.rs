use std::collections::{HashMap, HashSet};

use crate::board::{Board, Goal};
use crate::error::Error;
use crate::frontier::Frontier;
use crate::heuristic::manhattan_distance;
use crate::path::PathMap;
use crate::solver::Stats;

/// Greedy best-first search: always expands the board that looks closest to
/// the goal. Boards are marked on discovery. Fast, but not shortest.
pub fn gbfs(start: &Board, goal: &Goal, stats: &mut Stats) -> Option<Vec<Board>> {
    let mut frontier = Frontier::new();
    frontier.push(*start, manhattan_distance(start, goal), 0);
    let mut paths = PathMap::rooted(*start);

    while let Some((current, cost)) = frontier.pop() {
        if goal.is_goal(&current) {
            return Some(paths.reconstruct(current));
        }

        stats.expanded += 1;
        for child in current.neighbors() {
            stats.generated += 1;
            if paths.discover(child, current) {
                frontier.push(child, manhattan_distance(&child, goal), cost + 1);
            }
        }
    }

    None
}

/// A* on `f = g + h`. Boards are closed when expanded and re-queued when a
/// cheaper `g` is found first, so with a consistent heuristic the path is a
/// shortest one.
pub fn a_star(start: &Board, goal: &Goal, stats: &mut Stats) -> Option<Vec<Board>> {
    let mut frontier = Frontier::new();
    frontier.push(*start, manhattan_distance(start, goal), 0);
    let mut best = HashMap::from([(*start, 0)]);
    let mut closed = HashSet::new();
    let mut paths = PathMap::rooted(*start);

    while let Some((current, g)) = frontier.pop() {
        if !closed.insert(current) {
            continue;
        }

        if goal.is_goal(&current) {
            return Some(paths.reconstruct(current));
        }

        stats.expanded += 1;
        for child in current.neighbors() {
            stats.generated += 1;
            if closed.contains(&child) {
                continue;
            }

            let new_g = g + 1;
            if best.get(&child).map_or(true, |&c| new_g < c) {
                best.insert(child, new_g);
                paths.relink(child, current);
                frontier.push(child, new_g + manhattan_distance(&child, goal), new_g);
            }
        }
    }

    None
}

/// Result of one threshold-bounded probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Found(Vec<Board>),
    /// Smallest `f` seen above the threshold; `None` if nothing was cut off.
    Bound(Option<u32>),
}

/// IDA*: depth-first probes bounded by `f = g + h`, with the bound raised
/// each round to the smallest `f` that was cut off.
///
/// The search gives up once the bound passes `max_threshold`. No 8-puzzle
/// instance needs more than 31 moves, so a threshold of 31 only stops
/// searches that cannot succeed.
pub fn ida_star(
    start: &Board,
    goal: &Goal,
    max_threshold: u32,
    max_frames: usize,
    stats: &mut Stats,
) -> Result<Option<Vec<Board>>, Error> {
    let mut threshold = manhattan_distance(start, goal);

    while threshold <= max_threshold {
        match probe(start, goal, threshold, max_frames, stats)? {
            Probe::Found(path) => return Ok(Some(path)),
            Probe::Bound(Some(next)) => threshold = next,
            Probe::Bound(None) => return Ok(None),
        }
    }

    Ok(None)
}

/// One bounded depth-first walk from `start`. `path` always holds the boards
/// from the start down to the frame currently being expanded; a child
/// already on it is skipped.
pub fn probe(
    start: &Board,
    goal: &Goal,
    threshold: u32,
    max_frames: usize,
    stats: &mut Stats,
) -> Result<Probe, Error> {
    let f = manhattan_distance(start, goal);
    if f > threshold {
        return Ok(Probe::Bound(Some(f)));
    }
    if goal.is_goal(start) {
        return Ok(Probe::Found(vec![*start]));
    }

    let mut path = vec![*start];
    let mut pending = vec![expand(start, stats)];
    let mut minimum: Option<u32> = None;

    while let Some(children) = pending.last_mut() {
        let child = match children.next() {
            Some(child) => child,
            None => {
                pending.pop();
                path.pop();
                continue;
            }
        };

        if path.contains(&child) {
            continue;
        }

        let g = path.len() as u32;
        let f = g + manhattan_distance(&child, goal);
        if f > threshold {
            minimum = Some(minimum.map_or(f, |m| m.min(f)));
            continue;
        }

        path.push(child);
        if goal.is_goal(&child) {
            return Ok(Probe::Found(path));
        }

        if pending.len() >= max_frames {
            return Err(Error::ResourceExhausted { limit: max_frames });
        }
        pending.push(expand(&child, stats));
    }

    Ok(Probe::Bound(minimum))
}

fn expand(board: &Board, stats: &mut Stats) -> smallvec::IntoIter<[Board; 4]> {
    let children = board.neighbors();
    stats.expanded += 1;
    stats.generated += children.len();
    children.into_iter()
}
