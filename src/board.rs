use std::{
    fmt::{self, Debug, Display, Write},
    ops::Index,
    str::FromStr,
};

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use crate::error::Error;

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;

const BLANK: u8 = 0;

/// Children of a board, at most one per direction.
pub type Neighbors = SmallVec<[Board; 4]>;

/// The direction the blank travels in a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed exploration order used by every search.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// A 3×3 arrangement of the tiles 1-8 and the blank (0), row-major.
///
/// Every constructor checks that the cells are a permutation of 0-8, so a
/// `Board` held by a search is always well formed.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
    // index of the blank, always consistent with `cells`
    blank: u8,
}

impl Board {
    pub const SOLVED: Board = Board {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        blank: 8,
    };

    pub fn new(cells: [u8; CELLS]) -> Result<Board, Error> {
        let mut seen = [false; CELLS];
        for &c in &cells {
            let slot = seen
                .get_mut(c as usize)
                .ok_or_else(|| Error::InvalidState(format!("tile {} is outside 0..=8", c)))?;
            if *slot {
                return Err(Error::InvalidState(format!("tile {} appears more than once", c)));
            }
            *slot = true;
        }

        Ok(Board::from_permutation(cells))
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Board, Error> {
        if rows.len() != SIDE {
            return Err(Error::InvalidState(format!(
                "expected {} rows, found {}",
                SIDE,
                rows.len()
            )));
        }

        let mut cells = [0; CELLS];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != SIDE {
                return Err(Error::InvalidState(format!(
                    "row {} has {} cells (expected {})",
                    i,
                    row.len(),
                    SIDE
                )));
            }
            cells[i * SIDE..(i + 1) * SIDE].copy_from_slice(row);
        }

        Board::new(cells)
    }

    // caller guarantees `cells` is a permutation of 0..9
    fn from_permutation(cells: [u8; CELLS]) -> Board {
        let blank = cells.iter().position(|&c| c == BLANK).unwrap_or_default() as u8;
        Board { cells, blank }
    }

    /// A uniformly random permutation. Half of these are unsolvable.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mut cells = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        cells.shuffle(rng);
        Board::from_permutation(cells)
    }

    /// Walks `moves` random legal moves away from `goal`, so the result is
    /// always solvable.
    pub fn scrambled<R: Rng + ?Sized>(goal: &Goal, moves: usize, rng: &mut R) -> Board {
        let mut board = goal.board;
        for _ in 0..moves {
            if let Some(&next) = board.neighbors().choose(rng) {
                board = next;
            }
        }
        board
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(SIDE)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    pub fn blank(&self) -> (usize, usize) {
        let ix = self.blank as usize;
        (ix / SIDE, ix % SIDE)
    }

    /// The board after sliding the blank one cell in `direction`, if that
    /// stays on the grid.
    pub fn apply(&self, direction: Direction) -> Option<Board> {
        let (i, j) = self.blank();
        let (di, dj) = direction.delta();
        let (ni, nj) = (i as i32 + di, j as i32 + dj);
        let bounds = 0..SIDE as i32;
        if !bounds.contains(&ni) || !bounds.contains(&nj) {
            return None;
        }

        let target = ni as usize * SIDE + nj as usize;
        let mut next = *self;
        next.cells.swap(self.blank as usize, target);
        next.blank = target as u8;
        Some(next)
    }

    /// Children in `Direction::ALL` order.
    pub fn neighbors(&self) -> Neighbors {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.apply(d))
            .collect()
    }

    /// The move that turns `self` into `other`, if they are one move apart.
    pub fn direction_to(&self, other: &Board) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.apply(d).as_ref() == Some(other))
    }

    fn inversion_parity(&self) -> bool {
        let inversions = self
            .cells
            .iter()
            .filter(|&&c| c != BLANK)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count();
        inversions % 2 == 1
    }

    /// On a grid of odd width a board can reach the goal iff both have the
    /// same inversion parity (the blank is not counted).
    pub fn is_solvable_for(&self, goal: &Goal) -> bool {
        self.inversion_parity() == goal.board.inversion_parity()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::SOLVED
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0 * SIDE + index.1]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in self.rows() {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for (j, &c) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(if c == BLANK { '_' } else { (b'0' + c) as char })?;
            }
        }

        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.cells.iter().join(""))
    }
}

// either nine digits run together ("123456780") or separated numbers,
// which also covers the nested-list form "[[1, 2, 3], [4, 5, 6], [7, 8, 0]]"
#[auto_enums::auto_enum(Iterator)]
fn tokens(s: &str) -> impl Iterator<Item = &str> {
    let s = s.trim();
    if s.len() == CELLS && s.bytes().all(|b| b.is_ascii_digit()) {
        (0..CELLS).map(move |i| &s[i..i + 1])
    } else {
        s.split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
            .filter(|t| !t.is_empty())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Board, Error> {
        let values = tokens(s)
            .map(|t| {
                t.parse::<u8>()
                    .map_err(|_| Error::InvalidState(format!("`{}` is not a tile", t)))
            })
            .collect::<Result<Vec<u8>, Error>>()?;

        let cells: [u8; CELLS] = values.as_slice().try_into().map_err(|_| {
            Error::InvalidState(format!("expected {} tiles, found {}", CELLS, values.len()))
        })?;

        Board::new(cells)
    }
}

/// The arrangement a search is trying to reach.
///
/// Besides the board itself this keeps the target cell of every tile, which
/// the heuristic looks up for each tile it scores.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Goal {
    board: Board,
    targets: [(u8, u8); CELLS],
}

impl Goal {
    pub fn new(board: Board) -> Goal {
        let mut targets = [(0, 0); CELLS];
        for (ix, &c) in board.cells.iter().enumerate() {
            targets[c as usize] = ((ix / SIDE) as u8, (ix % SIDE) as u8);
        }
        Goal { board, targets }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_goal(&self, board: &Board) -> bool {
        *board == self.board
    }

    /// Row and column that `tile` occupies in the goal.
    pub fn target(&self, tile: u8) -> (usize, usize) {
        let (i, j) = self.targets[tile as usize];
        (i as usize, j as usize)
    }

    pub fn is_reachable(&self, from: &Board) -> bool {
        from.is_solvable_for(self)
    }
}

impl Default for Goal {
    fn default() -> Goal {
        Goal::new(Board::SOLVED)
    }
}
