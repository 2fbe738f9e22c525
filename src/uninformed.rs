use std::collections::{HashMap, VecDeque};

use crate::board::{Board, Goal, Neighbors};
use crate::error::Error;
use crate::frontier::Frontier;
use crate::path::PathMap;
use crate::solver::Stats;

/// Breadth-first search. Boards are marked when queued, so each is queued
/// at most once and the first path to the goal is a shortest one.
pub fn bfs(start: &Board, goal: &Goal, stats: &mut Stats) -> Option<Vec<Board>> {
    let mut queue = VecDeque::from([*start]);
    let mut paths = PathMap::rooted(*start);

    while let Some(current) = queue.pop_front() {
        if goal.is_goal(&current) {
            return Some(paths.reconstruct(current));
        }

        stats.expanded += 1;
        for child in current.neighbors() {
            stats.generated += 1;
            if paths.discover(child, current) {
                queue.push_back(child);
            }
        }
    }

    None
}

/// Depth-first search on an explicit stack, never going deeper than
/// `max_depth` moves. Boards are marked on discovery, which prunes other
/// routes to them: the result need not be shortest, and a solution inside
/// the bound can still be missed.
pub fn dfs(start: &Board, goal: &Goal, max_depth: usize, stats: &mut Stats) -> Option<Vec<Board>> {
    let mut stack = vec![(*start, 0)];
    let mut paths = PathMap::rooted(*start);

    while let Some((current, depth)) = stack.pop() {
        if goal.is_goal(&current) {
            return Some(paths.reconstruct(current));
        }

        if depth >= max_depth {
            continue;
        }

        stats.expanded += 1;
        for child in current.neighbors() {
            stats.generated += 1;
            if paths.discover(child, current) {
                stack.push((child, depth + 1));
            }
        }
    }

    None
}

/// Uniform-cost search. Every move costs 1, so this orders like BFS, but a
/// board is re-queued whenever a cheaper route to it turns up before it is
/// expanded.
pub fn ucs(start: &Board, goal: &Goal, stats: &mut Stats) -> Option<Vec<Board>> {
    let mut frontier = Frontier::new();
    frontier.push(*start, 0, 0);
    let mut best = HashMap::from([(*start, 0)]);
    let mut paths = PathMap::rooted(*start);

    while let Some((current, cost)) = frontier.pop() {
        // stale: a cheaper entry for this board was queued later
        if best.get(&current).map_or(false, |&c| cost > c) {
            continue;
        }

        if goal.is_goal(&current) {
            return Some(paths.reconstruct(current));
        }

        stats.expanded += 1;
        for child in current.neighbors() {
            stats.generated += 1;
            let new_cost = cost + 1;
            if best.get(&child).map_or(true, |&c| new_cost < c) {
                best.insert(child, new_cost);
                paths.relink(child, current);
                frontier.push(child, new_cost, new_cost);
            }
        }
    }

    None
}

/// Outcome of one depth-limited pass.
enum Deepening {
    Found(Vec<Board>),
    /// Some board sat exactly at the limit, so a deeper pass may find more.
    CutOff,
    /// Every reachable board was within the limit and none was the goal.
    Exhausted,
}

struct Frame {
    board: Board,
    pending: smallvec::IntoIter<[Board; 4]>,
}

impl Frame {
    fn new(board: Board, remaining: usize, stats: &mut Stats) -> Frame {
        let children = if remaining > 0 {
            stats.expanded += 1;
            board.neighbors()
        } else {
            Neighbors::new()
        };
        stats.generated += children.len();

        Frame {
            board,
            pending: children.into_iter(),
        }
    }
}

/// Iterative deepening: depth-limited searches with limits `0..=max_depth`,
/// each starting from scratch. The first path found is a shortest one.
///
/// Frames live on a heap-allocated stack; a pass that would hold more than
/// `max_frames` of them fails with [`Error::ResourceExhausted`].
pub fn iddfs(
    start: &Board,
    goal: &Goal,
    max_depth: usize,
    max_frames: usize,
    stats: &mut Stats,
) -> Result<Option<Vec<Board>>, Error> {
    for limit in 0..=max_depth {
        match depth_limited(start, goal, limit, max_frames, stats)? {
            Deepening::Found(path) => return Ok(Some(path)),
            Deepening::Exhausted => return Ok(None),
            Deepening::CutOff => {}
        }
    }

    Ok(None)
}

fn depth_limited(
    start: &Board,
    goal: &Goal,
    limit: usize,
    max_frames: usize,
    stats: &mut Stats,
) -> Result<Deepening, Error> {
    if goal.is_goal(start) {
        return Ok(Deepening::Found(vec![*start]));
    }

    // most moves still allowed when each board was last entered; a board is
    // entered again only with strictly more to spare
    let mut reached = HashMap::from([(*start, limit)]);
    let mut frames = vec![Frame::new(*start, limit, stats)];

    while let Some(frame) = frames.last_mut() {
        let child = match frame.pending.next() {
            Some(child) => child,
            None => {
                frames.pop();
                continue;
            }
        };

        let remaining = limit - frames.len();
        if reached.get(&child).map_or(false, |&r| r >= remaining) {
            continue;
        }
        reached.insert(child, remaining);

        if goal.is_goal(&child) {
            let mut path: Vec<Board> = frames.iter().map(|f| f.board).collect();
            path.push(child);
            return Ok(Deepening::Found(path));
        }

        if frames.len() >= max_frames {
            return Err(Error::ResourceExhausted { limit: max_frames });
        }
        frames.push(Frame::new(child, remaining, stats));
    }

    // `reached` now holds limit minus the true distance of every board
    // within the limit
    if reached.values().any(|&r| r == 0) {
        Ok(Deepening::CutOff)
    } else {
        Ok(Deepening::Exhausted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Direction;
    use crate::path::is_valid_path;

    fn one_move() -> Board {
        Board::SOLVED.apply(Direction::Left).unwrap()
    }

    fn scenario() -> Board {
        "265870431".parse().unwrap()
    }

    #[test]
    fn bfs_finds_shortest() {
        let goal = Goal::default();
        let mut stats = Stats::default();
        assert_eq!(bfs(&Board::SOLVED, &goal, &mut stats), Some(vec![Board::SOLVED]));
        assert_eq!(stats.expanded, 0);

        let path = bfs(&one_move(), &goal, &mut stats).unwrap();
        assert_eq!(path, vec![one_move(), Board::SOLVED]);
    }

    #[test]
    fn dfs_respects_depth_bound() {
        let goal = Goal::default();
        let mut stats = Stats::default();
        assert_eq!(dfs(&one_move(), &goal, 0, &mut stats), None);

        let path = dfs(&one_move(), &goal, 100, &mut stats).unwrap();
        assert!(path.len() <= 101);
        assert!(is_valid_path(&path));
        assert_eq!(path.first(), Some(&one_move()));
        assert_eq!(path.last(), Some(&Board::SOLVED));
    }

    #[test]
    fn ucs_and_iddfs_match_bfs_length() {
        let goal = Goal::default();
        let mut stats = Stats::default();
        let shortest = bfs(&scenario(), &goal, &mut stats).unwrap();

        let by_cost = ucs(&scenario(), &goal, &mut stats).unwrap();
        assert_eq!(by_cost.len(), shortest.len());
        assert!(is_valid_path(&by_cost));

        let deepened = iddfs(&scenario(), &goal, 50, 256, &mut stats)
            .unwrap()
            .unwrap();
        assert_eq!(deepened.len(), shortest.len());
        assert!(is_valid_path(&deepened));
        assert_eq!(deepened.first(), Some(&scenario()));
    }

    #[test]
    fn iddfs_respects_depth_limit() {
        let goal = Goal::default();
        let mut stats = Stats::default();
        assert_eq!(iddfs(&scenario(), &goal, 3, 256, &mut stats), Ok(None));
        assert_eq!(
            iddfs(&Board::SOLVED, &goal, 0, 256, &mut stats),
            Ok(Some(vec![Board::SOLVED]))
        );
    }

    #[test]
    fn iddfs_guards_frame_stack() {
        let goal = Goal::default();
        let mut stats = Stats::default();
        assert_eq!(
            iddfs(&scenario(), &goal, 50, 4, &mut stats),
            Err(Error::ResourceExhausted { limit: 4 })
        );
    }

    #[test]
    fn iddfs_stops_once_space_is_exhausted() {
        let goal = Goal::default();
        let unsolvable: Board = "123456870".parse().unwrap();
        let mut stats = Stats::default();
        // nothing reachable is more than 31 moves away, so the pass at
        // depth 32 finds no board at the limit and the search stops there
        assert_eq!(iddfs(&unsolvable, &goal, 50, 40, &mut stats), Ok(None));
    }
}
