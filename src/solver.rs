use std::{
    fmt::{self, Display},
    str::FromStr,
    time::{Duration, Instant},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::board::{Board, Goal};
use crate::error::Error;
use crate::{informed, local, uninformed};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    Iddfs,
    Gbfs,
    AStar,
    IdaStar,
    HillSimple,
    HillSteepest,
    HillStochastic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Ucs,
        Algorithm::Iddfs,
        Algorithm::Gbfs,
        Algorithm::AStar,
        Algorithm::IdaStar,
        Algorithm::HillSimple,
        Algorithm::HillSteepest,
        Algorithm::HillStochastic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Iddfs => "iddfs",
            Algorithm::Gbfs => "gbfs",
            Algorithm::AStar => "a_star",
            Algorithm::IdaStar => "ida_star",
            Algorithm::HillSimple => "hill_simple",
            Algorithm::HillSteepest => "hill_steepest",
            Algorithm::HillStochastic => "hill_stochastic",
        }
    }

    /// Finds a solution whenever one exists within the configured limits.
    pub fn is_complete(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs
                | Algorithm::Ucs
                | Algorithm::Iddfs
                | Algorithm::Gbfs
                | Algorithm::AStar
                | Algorithm::IdaStar
        )
    }

    /// Solutions are always shortest.
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Ucs | Algorithm::Iddfs | Algorithm::AStar | Algorithm::IdaStar
        )
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm, Error> {
        match s {
            "A_star" => Ok(Algorithm::AStar),
            "hill_simp" => Ok(Algorithm::HillSimple),
            _ => Algorithm::ALL
                .into_iter()
                .find(|a| a.name() == s)
                .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Bounds on the bounded and iterative-deepening searches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Deepest move count DFS explores.
    pub dfs_depth: usize,
    /// Largest depth limit IDDFS tries.
    pub iddfs_depth: usize,
    /// Largest f threshold IDA* tries.
    pub ida_threshold: u32,
    /// Frames the IDDFS and IDA* probes may hold at once.
    pub max_frames: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            dfs_depth: 100,
            iddfs_depth: 50,
            ida_threshold: 31,
            max_frames: 256,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Boards whose children were generated.
    pub expanded: usize,
    pub generated: usize,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub algorithm: Algorithm,
    /// Start first, goal last; `None` if the algorithm found nothing.
    pub path: Option<Vec<Board>>,
    pub elapsed: Duration,
    pub stats: Stats,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves in the path.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs any of the algorithms against one goal.
///
/// The solver owns the random source used by the randomized hill climbers,
/// so seeding it makes every algorithm reproducible. Each call builds its
/// own frontier and maps; nothing is shared between solves.
#[derive(Debug, Clone)]
pub struct Solver<R = SmallRng> {
    goal: Goal,
    limits: Limits,
    rng: R,
}

impl Solver<SmallRng> {
    pub fn new() -> Self {
        Solver::with_rng(Goal::default(), Limits::default(), SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Solver::with_rng(Goal::default(), Limits::default(), SmallRng::seed_from_u64(seed))
    }
}

impl Default for Solver<SmallRng> {
    fn default() -> Self {
        Solver::new()
    }
}

impl<R: Rng> Solver<R> {
    pub fn with_rng(goal: Goal, limits: Limits, rng: R) -> Self {
        Solver { goal, limits, rng }
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Runs `algorithm` once from `start` and times it.
    ///
    /// Not finding a path is a normal outcome (`path == None`); errors are
    /// reserved for exceeding `Limits::max_frames`.
    pub fn solve(&mut self, start: &Board, algorithm: Algorithm) -> Result<Solution, Error> {
        let mut stats = Stats::default();
        let started = Instant::now();
        let path = self.run(start, algorithm, &mut stats)?;
        let elapsed = started.elapsed();

        Ok(Solution {
            algorithm,
            path,
            elapsed,
            stats,
        })
    }

    /// Like [`Solver::solve`], taking the algorithm by name.
    pub fn solve_named(&mut self, start: &Board, name: &str) -> Result<Solution, Error> {
        let algorithm = name.parse()?;
        self.solve(start, algorithm)
    }

    fn run(
        &mut self,
        start: &Board,
        algorithm: Algorithm,
        stats: &mut Stats,
    ) -> Result<Option<Vec<Board>>, Error> {
        let goal = &self.goal;
        let limits = &self.limits;

        Ok(match algorithm {
            Algorithm::Dfs => uninformed::dfs(start, goal, limits.dfs_depth, stats),
            Algorithm::Bfs => uninformed::bfs(start, goal, stats),
            Algorithm::Ucs => uninformed::ucs(start, goal, stats),
            Algorithm::Iddfs => {
                uninformed::iddfs(start, goal, limits.iddfs_depth, limits.max_frames, stats)?
            }
            Algorithm::Gbfs => informed::gbfs(start, goal, stats),
            Algorithm::AStar => informed::a_star(start, goal, stats),
            Algorithm::IdaStar => {
                informed::ida_star(start, goal, limits.ida_threshold, limits.max_frames, stats)?
            }
            Algorithm::HillSimple => local::hill_simple(start, goal, &mut self.rng, stats),
            Algorithm::HillSteepest => local::hill_steepest(start, goal, stats),
            Algorithm::HillStochastic => local::hill_stochastic(start, goal, &mut self.rng, stats),
        })
    }
}
