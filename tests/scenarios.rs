use eight_puzzle::{is_valid_path, manhattan_distance, Algorithm, Board, Goal, Solver};
use pathfinding::directed::bfs::bfs;
use rand::{rngs::SmallRng, SeedableRng};

const COMPLETE: [Algorithm; 5] = [
    Algorithm::Bfs,
    Algorithm::Ucs,
    Algorithm::Iddfs,
    Algorithm::AStar,
    Algorithm::IdaStar,
];

fn board(rows: [[u8; 3]; 3]) -> Board {
    Board::from_rows(&rows).unwrap()
}

// independent shortest path length, in boards
fn reference_len(start: &Board, goal: &Goal) -> Option<usize> {
    bfs(start, |b| b.neighbors(), |b| goal.is_goal(b)).map(|p| p.len())
}

fn check_path(path: &[Board], start: &Board, goal: &Goal) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal.board()));
    assert!(is_valid_path(path));
}

#[test]
fn already_solved() {
    let start = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    let mut solver = Solver::seeded(1);

    for algorithm in Algorithm::ALL {
        let solution = solver.solve(&start, algorithm).unwrap();
        assert_eq!(solution.path, Some(vec![start]), "{}", algorithm);
        assert_eq!(solution.moves(), Some(0));
    }
}

#[test]
fn one_move_from_goal() {
    let start = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
    let mut solver = Solver::seeded(2);

    for algorithm in Algorithm::ALL {
        let solution = solver.solve(&start, algorithm).unwrap();
        let path = solution.path.unwrap();
        check_path(&path, &start, solver.goal());
        if algorithm.is_optimal() {
            assert_eq!(path.len(), 2, "{}", algorithm);
        }
    }
}

#[test]
fn general_solvable_case() {
    let start = board([[2, 6, 5], [8, 7, 0], [4, 3, 1]]);
    let mut solver = Solver::seeded(3);
    let goal = *solver.goal();
    let shortest = reference_len(&start, &goal).unwrap();

    for algorithm in COMPLETE {
        let path = solver.solve(&start, algorithm).unwrap().path.unwrap();
        check_path(&path, &start, &goal);
        assert_eq!(path.len(), shortest, "{}", algorithm);
    }

    // these may get stuck, but anything they return must be a real path
    for algorithm in [
        Algorithm::Dfs,
        Algorithm::Gbfs,
        Algorithm::HillSimple,
        Algorithm::HillSteepest,
        Algorithm::HillStochastic,
    ] {
        if let Some(path) = solver.solve(&start, algorithm).unwrap().path {
            check_path(&path, &start, &goal);
            assert!(path.len() >= shortest);
        }
    }
}

#[test]
fn unsolvable_case() {
    let start = board([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
    let mut solver = Solver::seeded(4);
    assert!(!solver.goal().is_reachable(&start));

    for algorithm in COMPLETE.into_iter().chain([Algorithm::Gbfs, Algorithm::Dfs]) {
        let solution = solver.solve_named(&start, algorithm.name()).unwrap();
        assert!(!solution.is_found(), "{}", algorithm);
        assert_eq!(solution.moves(), None);
    }

    for algorithm in [
        Algorithm::HillSimple,
        Algorithm::HillSteepest,
        Algorithm::HillStochastic,
    ] {
        assert_eq!(solver.solve(&start, algorithm).unwrap().path, None);
    }
}

#[test]
fn optimal_algorithms_agree_on_scrambles() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut solver = Solver::seeded(5);
    let goal = *solver.goal();

    for _ in 0..8 {
        let start = Board::scrambled(&goal, 18, &mut rng);
        let shortest = reference_len(&start, &goal).unwrap();
        for algorithm in COMPLETE {
            let path = solver.solve(&start, algorithm).unwrap().path.unwrap();
            check_path(&path, &start, &goal);
            assert_eq!(path.len(), shortest, "{} from {:?}", algorithm, start);
        }
    }
}

#[test]
fn parity_predicts_reachability() {
    let mut rng = SmallRng::seed_from_u64(12);
    let goal = Goal::default();
    for _ in 0..6 {
        let start = Board::random(&mut rng);
        assert_eq!(
            goal.is_reachable(&start),
            reference_len(&start, &goal).is_some(),
            "{:?}",
            start
        );
    }
}

#[test]
fn heuristic_is_consistent_along_paths() {
    let start = board([[2, 6, 5], [8, 7, 0], [4, 3, 1]]);
    let mut solver = Solver::seeded(6);
    let goal = *solver.goal();
    let path = solver.solve(&start, Algorithm::AStar).unwrap().path.unwrap();

    assert_eq!(manhattan_distance(goal.board(), &goal), 0);
    // admissible: never more than the moves actually left
    for (moves_left, b) in path.iter().rev().enumerate() {
        assert!(manhattan_distance(b, &goal) as usize <= moves_left);
    }
    for w in path.windows(2) {
        let (a, b) = (manhattan_distance(&w[0], &goal), manhattan_distance(&w[1], &goal));
        assert!(a.abs_diff(b) <= 1);
    }
}

#[test]
fn moves_are_reversible() {
    let mut rng = SmallRng::seed_from_u64(13);
    for _ in 0..50 {
        let b = Board::random(&mut rng);
        let first = b.neighbors()[0];
        assert!(first.neighbors().contains(&b));
    }
}

#[test]
fn seeded_solvers_repeat_themselves() {
    let goal = Goal::default();
    let start = Board::scrambled(&goal, 25, &mut SmallRng::seed_from_u64(14));

    for algorithm in [Algorithm::HillSimple, Algorithm::HillStochastic] {
        let a = Solver::seeded(99).solve(&start, algorithm).unwrap();
        let b = Solver::seeded(99).solve(&start, algorithm).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.stats, b.stats);
    }
}

#[test]
fn rejects_bad_input() {
    assert!(Board::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 8]]).is_err());
    assert!("1 2 3 4 5 6 7 8".parse::<Board>().is_err());

    let mut solver = Solver::seeded(7);
    assert!(solver.solve_named(&Board::SOLVED, "quantum").is_err());
}
