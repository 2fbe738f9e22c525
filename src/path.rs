use std::collections::{hash_map::Entry, HashMap};

use itertools::Itertools;

use crate::board::Board;

/// Parent pointers from each discovered board back towards the start.
///
/// The keys double as the visited set of the searches that mark boards on
/// discovery. Entries are only added for boards not yet in the map, or
/// re-pointed before the board is expanded, so the map stays a tree rooted
/// at the start.
#[derive(Debug, Clone)]
pub struct PathMap {
    parents: HashMap<Board, Option<Board>>,
}

impl PathMap {
    pub fn rooted(start: Board) -> PathMap {
        let mut parents = HashMap::new();
        parents.insert(start, None);
        PathMap { parents }
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.parents.contains_key(board)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Records `parent` as the discoverer of `child` unless `child` was seen
    /// before. Returns whether it was new.
    pub fn discover(&mut self, child: Board, parent: Board) -> bool {
        match self.parents.entry(child) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(Some(parent));
                true
            }
        }
    }

    /// Points `child` at `parent`, replacing any earlier discoverer.
    pub fn relink(&mut self, child: Board, parent: Board) {
        self.parents.insert(child, Some(parent));
    }

    /// The path from the start to `end`, start first.
    pub fn reconstruct(&self, end: Board) -> Vec<Board> {
        let mut steps = vec![end];
        let mut current = end;
        while let Some(&Some(parent)) = self.parents.get(&current) {
            steps.push(parent);
            current = parent;
        }
        steps.reverse();
        steps
    }
}

/// Every consecutive pair of boards is one legal move apart.
pub fn is_valid_path(path: &[Board]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.direction_to(b).is_some())
}
