//! World regime lock tests: lights-out optimality, weighted-graph routing,
//! termination on unsolvable problems, and contract violations surfaced
//! through the harness.

use lock_tests::search_test_helpers::{assert_plan_valid, solve};
use waypoint_harness::runner::{run_search, SearchRunError, StrategyV1};
use waypoint_harness::worlds::lights_out::LightsOut;
use waypoint_harness::worlds::weighted_graph::WeightedGraph;
use waypoint_search::error::SearchError;
use waypoint_search::policy::SearchPolicyV1;

// ---------------------------------------------------------------------------
// ACCEPTANCE: LIGHTS-OUT-OPTIMAL
// ---------------------------------------------------------------------------

#[test]
fn lights_out_three_corner_presses_solve_in_three() {
    let world = LightsOut::from_presses(3, &[0, 4, 8]).unwrap();
    let policy = SearchPolicyV1::default();

    for strategy in [
        StrategyV1::BreadthFirst,
        StrategyV1::IterativeDeepening,
        StrategyV1::UniformCost,
        StrategyV1::AStar,
    ] {
        let (outcome, _) = solve(&world, strategy, &policy);
        let solution = outcome.unwrap().unwrap();
        assert_plan_valid(&world, &solution);
        assert_eq!(solution.cost(), 3, "{strategy}");

        let mut presses: Vec<usize> = solution.plan().actions().iter().map(|&&a| a).collect();
        presses.sort_unstable();
        assert_eq!(presses, vec![0, 4, 8], "{strategy}: optimal press set is unique");
    }
}

#[test]
fn lights_out_lower_bound_saves_effort() {
    let world = LightsOut::from_presses(3, &[0, 4, 8]).unwrap();
    let policy = SearchPolicyV1::default();

    let (_, ucs_nodes) = solve(&world, StrategyV1::UniformCost, &policy);
    let (_, astar_nodes) = solve(&world, StrategyV1::AStar, &policy);
    assert!(astar_nodes < ucs_nodes);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: NO-SOLUTION-TERMINATION
// ---------------------------------------------------------------------------

#[test]
fn unsolvable_lights_out_exhausts_reachable_space() {
    // One lit corner on 4x4 is outside the press space; 2^12 boards reachable.
    let world = LightsOut::new(4, &[0]).unwrap();
    let policy = SearchPolicyV1::default();

    for strategy in [StrategyV1::BreadthFirst, StrategyV1::UniformCost] {
        let (outcome, nodes_considered) = solve(&world, strategy, &policy);
        assert!(outcome.unwrap().is_none(), "{strategy}");
        assert_eq!(nodes_considered, 4096, "{strategy}: each board tested once");
    }

    let (outcome, _) = solve(&world, StrategyV1::AStar, &policy);
    assert!(outcome.unwrap().is_none());
}

#[test]
fn unreachable_goal_terminates_for_every_strategy() {
    let world = WeightedGraph::diamond().with_goal("Z");
    let policy = SearchPolicyV1::default();

    for strategy in StrategyV1::ALL {
        let report = run_search(&world, strategy, &policy).unwrap();
        assert!(!report.is_solved(), "{strategy}");
        assert!(report.nodes_considered > 0, "{strategy}");
    }
}

#[test]
fn cyclic_graph_without_goal_terminates() {
    let world = WeightedGraph::new(
        "X",
        "Z",
        &[("X", "Y", 1), ("Y", "X", 1), ("Y", "Y", 1)],
    );
    let policy = SearchPolicyV1::default();

    for strategy in StrategyV1::ALL {
        let report = run_search(&world, strategy, &policy).unwrap();
        assert!(!report.is_solved(), "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: WEIGHTED-ROUTING
// ---------------------------------------------------------------------------

#[test]
fn diamond_routes_per_strategy() {
    let world = WeightedGraph::diamond();
    let policy = SearchPolicyV1::default();

    let route = |strategy| {
        let report = run_search(&world, strategy, &policy).unwrap();
        let solution = report.solution.expect("diamond is solvable");
        (solution.cost, solution.plan)
    };

    let (cost, plan) = route(StrategyV1::BreadthFirst);
    assert_eq!(cost, 7);
    assert_eq!(plan, serde_json::json!(["S", "A", "A", "G", "G"]).as_array().unwrap().clone());

    let (cost, _) = route(StrategyV1::DepthFirst);
    assert_eq!(cost, 5);

    for strategy in [StrategyV1::UniformCost, StrategyV1::AStar] {
        let (cost, plan) = route(strategy);
        assert_eq!(cost, 3, "{strategy}");
        assert_eq!(
            plan,
            serde_json::json!(["S", "A", "A", "B", "B", "G", "G"])
                .as_array()
                .unwrap()
                .clone(),
            "{strategy}"
        );
    }
}

#[test]
fn parallel_edges_pick_the_cheaper_one() {
    let world = WeightedGraph::new("x", "y", &[("x", "y", 5), ("x", "y", 2)]);
    let report = run_search(&world, StrategyV1::UniformCost, &SearchPolicyV1::default()).unwrap();
    assert_eq!(report.solution.unwrap().cost, 2);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: CONTRACT-VIOLATIONS
// ---------------------------------------------------------------------------

#[test]
fn negative_edge_is_rejected_by_every_expanding_strategy() {
    let world = WeightedGraph::new("S", "G", &[("S", "A", -1), ("A", "G", 1)]);
    let policy = SearchPolicyV1::default();

    for strategy in StrategyV1::ALL {
        let err = run_search(&world, strategy, &policy).unwrap_err();
        assert_eq!(
            err,
            SearchRunError::Search(SearchError::NegativeStepCost { depth: 1, cost: -1 }),
            "{strategy}"
        );
    }
}

#[test]
fn negative_estimate_is_rejected_by_astar_only() {
    let world = WeightedGraph::diamond().with_estimates(&[("S", -1)]);
    let policy = SearchPolicyV1::default();

    let err = run_search(&world, StrategyV1::AStar, &policy).unwrap_err();
    assert_eq!(
        err,
        SearchRunError::Search(SearchError::NegativeHeuristic {
            depth: 0,
            estimate: -1
        })
    );

    let report = run_search(&world, StrategyV1::UniformCost, &policy).unwrap();
    assert_eq!(report.solution.unwrap().cost, 3);
}
