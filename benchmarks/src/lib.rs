//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::contract::WorldV1;
use waypoint_harness::runner::StrategyV1;
use waypoint_harness::worlds::eight_puzzle::{Board, EightPuzzle, PuzzleHeuristic};
use waypoint_harness::worlds::lights_out::LightsOut;
use waypoint_search::policy::SearchPolicyV1;
use waypoint_search::problem::SearchProblem;
use waypoint_search::search::{
    astar, breadth_first, depth_first, iterative_deepening, uniform_cost,
};

/// 14 moves from solved, blank in the centre.
pub const CENTER_START: Board = [1, 2, 3, 4, 0, 5, 6, 7, 8];

/// 8 moves from solved.
pub const SHALLOW_START: Board = [6, 3, 2, 1, 0, 5, 7, 4, 8];

/// Depth bound that keeps DFS tractable on the eight-puzzle.
pub const BENCH_MAX_DEPTH: u32 = 20;

/// An eight-puzzle start paired with the policy to run it under.
pub struct Regime {
    pub name: &'static str,
    pub start: Board,
    pub policy: SearchPolicyV1,
}

/// The eight-puzzle regimes timed by the strategy benches.
#[must_use]
pub fn puzzle_regimes() -> Vec<Regime> {
    let policy = SearchPolicyV1 {
        max_depth: Some(BENCH_MAX_DEPTH),
        ..SearchPolicyV1::default()
    };
    vec![
        Regime {
            name: "shallow",
            start: SHALLOW_START,
            policy,
        },
        Regime {
            name: "center",
            start: CENTER_START,
            policy,
        },
    ]
}

/// The regime's board as a world using `heuristic` for A*.
///
/// # Panics
///
/// Panics if the regime's board is not a permutation. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn puzzle(regime: &Regime, heuristic: PuzzleHeuristic) -> EightPuzzle {
    EightPuzzle::new(regime.start)
        .expect("regime board is a permutation")
        .with_heuristic(heuristic)
}

/// 4x4 lights-out with one lit corner: unsolvable, 4096 reachable boards.
///
/// # Panics
///
/// Never: the size and cell are in range.
#[must_use]
pub fn dead_end_lights_out() -> LightsOut {
    LightsOut::new(4, &[0]).expect("4x4 with corner 0 is valid")
}

/// Run `strategy` against the engine only (no report encoding) and return
/// the number of goal tests it performed.
///
/// # Panics
///
/// Panics if the engine returns an error. Benchmark worlds honor the model
/// contract.
pub fn run_engine_only<W: WorldV1>(world: &W, strategy: StrategyV1, policy: &SearchPolicyV1) -> u64 {
    let goal = |s: &W::State| world.is_goal(s);
    let problem = SearchProblem::new(world.initial_state(), goal, world);
    let outcome = match strategy {
        StrategyV1::BreadthFirst => breadth_first(&problem),
        StrategyV1::DepthFirst => depth_first(&problem, policy.max_depth),
        StrategyV1::IterativeDeepening => iterative_deepening(&problem, policy.deepening_ceiling),
        StrategyV1::UniformCost => uniform_cost(&problem),
        StrategyV1::AStar => astar(&problem, |node| world.heuristic(node)),
    };
    outcome.expect("search should succeed in benchmarks");
    problem.nodes_considered()
}
