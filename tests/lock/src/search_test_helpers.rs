//! Shared helpers for checking search results against a world's rules.
//!
//! Every strategy's answer is re-validated here from first principles: the
//! plan is replayed through the world's model, so a test cannot pass on a
//! solution whose bookkeeping (cost, depth) drifted from its trajectory.

use waypoint_harness::contract::WorldV1;
use waypoint_harness::runner::StrategyV1;
use waypoint_harness::worlds::eight_puzzle::{Board, EightPuzzle, PuzzleHeuristic};
use waypoint_search::contract::SearchModel;
use waypoint_search::error::SearchError;
use waypoint_search::policy::SearchPolicyV1;
use waypoint_search::problem::SearchProblem;
use waypoint_search::search::{
    astar, breadth_first, depth_first, iterative_deepening, uniform_cost, Solution,
};

/// Blank in the centre; 14 moves from solved.
pub const CENTER_START: Board = [1, 2, 3, 4, 0, 5, 6, 7, 8];

/// Optimal plan length (and cost) from [`CENTER_START`].
pub const CENTER_OPTIMAL: i64 = 14;

/// Depth bound that keeps DFS tractable on the eight-puzzle.
pub const FIXTURE_MAX_DEPTH: u32 = 20;

/// The policy used by the fixture binary and cross-strategy lock tests.
#[must_use]
pub fn fixture_policy() -> SearchPolicyV1 {
    SearchPolicyV1 {
        max_depth: Some(FIXTURE_MAX_DEPTH),
        ..SearchPolicyV1::default()
    }
}

/// [`CENTER_START`] as a world with the given A* estimate.
///
/// # Panics
///
/// Never: the board is a fixed permutation.
#[must_use]
pub fn center_puzzle(heuristic: PuzzleHeuristic) -> EightPuzzle {
    EightPuzzle::new(CENTER_START)
        .expect("fixed board is a permutation")
        .with_heuristic(heuristic)
}

/// Engine-level outcome of one run plus the problem's final goal-test count.
pub type SolveResult<W> = (
    Result<Option<Solution<<W as SearchModel>::State, <W as SearchModel>::Action>>, SearchError>,
    u64,
);

/// Run `strategy` directly against the engine (no report encoding).
pub fn solve<W: WorldV1>(world: &W, strategy: StrategyV1, policy: &SearchPolicyV1) -> SolveResult<W> {
    let goal = |s: &W::State| world.is_goal(s);
    let problem = SearchProblem::new(world.initial_state(), goal, world);
    let outcome = match strategy {
        StrategyV1::BreadthFirst => breadth_first(&problem),
        StrategyV1::DepthFirst => depth_first(&problem, policy.max_depth),
        StrategyV1::IterativeDeepening => iterative_deepening(&problem, policy.deepening_ceiling),
        StrategyV1::UniformCost => uniform_cost(&problem),
        StrategyV1::AStar => astar(&problem, |node| world.heuristic(node)),
    };
    (outcome, problem.nodes_considered())
}

/// Replay a solution's plan through `world` and check every claim it makes.
///
/// # Panics
///
/// Panics (test failure) if the plan does not start at the world's initial
/// state, uses an illegal action, disagrees with `successor`, does not end in
/// a goal, or if the recorded cost or depth differ from the replayed ones.
pub fn assert_plan_valid<W>(world: &W, solution: &Solution<W::State, W::Action>)
where
    W: WorldV1,
    W::State: std::fmt::Debug,
    W::Action: PartialEq + std::fmt::Debug,
{
    let plan = solution.plan();
    assert_eq!(
        plan.states().len(),
        plan.actions().len() + 1,
        "plan must alternate states and actions"
    );
    assert_eq!(
        plan.initial_state(),
        &world.initial_state(),
        "plan must start at the initial state"
    );
    assert_eq!(
        u32::try_from(plan.len()).expect("plan length fits u32"),
        solution.depth(),
        "depth must equal plan length"
    );

    let mut replayed_cost = 0i64;
    for (step, (from, action, to)) in plan.transitions().enumerate() {
        assert!(
            world.legal_actions(from).contains(action),
            "step {step}: {action:?} is not legal in {from:?}"
        );
        assert_eq!(
            &world.successor(from, action),
            to,
            "step {step}: successor disagrees with the plan"
        );
        replayed_cost += world.step_cost(from, action);
    }

    assert!(world.is_goal(plan.final_state()), "plan must end in a goal");
    assert_eq!(
        replayed_cost,
        solution.cost(),
        "cost must equal the sum of step costs"
    );
}
