use clap::Parser;
use eight_puzzle::{Algorithm, Board, Goal, Limits, Solver};
use rand::{rngs::SmallRng, SeedableRng};

// Start boards used when none are given: already solved, one move away,
// a longer solvable case and an unsolvable one.
const EXAMPLES: &[&str] = &[
    "1 2 3
     4 5 6
     7 8 0",
    "1 2 3
     4 5 6
     7 0 8",
    "2 6 5
     8 7 0
     4 3 1",
    "1 2 3
     4 5 6
     8 7 0",
];

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Algorithm to run (dfs, bfs, ucs, iddfs, gbfs, a_star, ida_star,
    /// hill_simple, hill_steepest, hill_stochastic) or `all`
    #[clap(short, long, default_value = "all")]
    algorithm: String,

    /// Start board, e.g. "265870431"; may be repeated
    #[clap(short, long)]
    board: Vec<String>,

    /// Also solve a uniformly random board (possibly unsolvable)
    #[clap(long)]
    random: bool,

    /// Also solve a board this many random moves from the goal
    #[clap(long)]
    scramble: Option<usize>,

    /// Seed for random boards and the randomized hill climbers
    #[clap(long)]
    seed: Option<u64>,

    #[clap(long, default_value_t = Limits::default().dfs_depth)]
    dfs_depth: usize,

    #[clap(long, default_value_t = Limits::default().iddfs_depth)]
    iddfs_depth: usize,

    #[clap(long, default_value_t = Limits::default().ida_threshold)]
    ida_threshold: u32,

    /// Print every board along each solution
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let algorithms = if args.algorithm == "all" {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm.parse::<Algorithm>()?]
    };

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let goal = Goal::default();
    let mut boards = args
        .board
        .iter()
        .map(|b| b.parse::<Board>())
        .collect::<Result<Vec<_>, _>>()?;
    if args.random {
        boards.push(Board::random(&mut rng));
    }
    if let Some(moves) = args.scramble {
        boards.push(Board::scrambled(&goal, moves, &mut rng));
    }
    if boards.is_empty() {
        boards = EXAMPLES
            .iter()
            .map(|b| b.parse::<Board>())
            .collect::<Result<Vec<_>, _>>()?;
    }

    let limits = Limits {
        dfs_depth: args.dfs_depth,
        iddfs_depth: args.iddfs_depth,
        ida_threshold: args.ida_threshold,
        ..Limits::default()
    };
    let mut solver = Solver::with_rng(goal, limits, rng);

    for board in &boards {
        println!("----");
        println!("Start:");
        println!("{}", board);
        if !goal.is_reachable(board) {
            println!("(unsolvable: wrong inversion parity)");
        }
        println!("----");

        for &algorithm in &algorithms {
            let solution = solver.solve(board, algorithm)?;

            match (&solution.path, solution.moves()) {
                (Some(path), Some(moves)) => {
                    println!(
                        "{}: solved in {} moves ({:.3}s)",
                        algorithm,
                        moves,
                        solution.elapsed_secs()
                    );
                    if args.verbose {
                        let steps: Vec<String> = path
                            .windows(2)
                            .filter_map(|w| w[0].direction_to(&w[1]))
                            .map(|d| d.to_string())
                            .collect();
                        println!("  blank moves: {}", steps.join(" "));
                        for step in path {
                            println!("{}\n", step);
                        }
                    }
                }
                _ => println!(
                    "{}: no solution found ({:.3}s)",
                    algorithm,
                    solution.elapsed_secs()
                ),
            }
            println!(
                "  expanded {} board positions (generated {} total).",
                solution.stats.expanded, solution.stats.generated
            );
        }

        println!();
    }

    Ok(())
}
