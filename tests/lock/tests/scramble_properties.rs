//! Property tests over random eight-puzzle scrambles.
//!
//! A scramble is a random walk from the solved board, so it is always
//! solvable and its length bounds the optimal plan from above.

use lock_tests::search_test_helpers::{assert_plan_valid, solve};
use proptest::prelude::*;
use waypoint_harness::runner::StrategyV1;
use waypoint_harness::worlds::eight_puzzle::{
    is_solvable, manhattan_distance, misplaced_tiles, Board, EightPuzzle, PuzzleHeuristic, SOLVED,
};
use waypoint_search::contract::SearchModel;
use waypoint_search::policy::SearchPolicyV1;

/// Apply `walk` to the solved board, each entry picking among legal slides.
fn scramble(walk: &[usize]) -> Board {
    let model = EightPuzzle::new(SOLVED).expect("solved board is a permutation");
    walk.iter().fold(SOLVED, |board, &pick| {
        let moves = model.legal_actions(&board);
        model.successor(&board, &moves[pick % moves.len()])
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn optimal_strategies_agree_on_scrambles(walk in prop::collection::vec(0usize..4, 0..12)) {
        let board = scramble(&walk);
        prop_assert!(is_solvable(&board));
        let policy = SearchPolicyV1::default();

        let bfs_world = EightPuzzle::new(board).unwrap();
        let (bfs, _) = solve(&bfs_world, StrategyV1::BreadthFirst, &policy);
        let bfs = bfs.unwrap().unwrap();
        assert_plan_valid(&bfs_world, &bfs);
        prop_assert!(usize::try_from(bfs.depth()).unwrap() <= walk.len());

        let (iddfs, _) = solve(&bfs_world, StrategyV1::IterativeDeepening, &policy);
        let iddfs = iddfs.unwrap().unwrap();
        assert_plan_valid(&bfs_world, &iddfs);
        prop_assert_eq!(iddfs.depth(), bfs.depth());

        for heuristic in [PuzzleHeuristic::Zero, PuzzleHeuristic::Manhattan] {
            let world = EightPuzzle::new(board).unwrap().with_heuristic(heuristic);
            let strategy = if heuristic == PuzzleHeuristic::Zero {
                StrategyV1::UniformCost
            } else {
                StrategyV1::AStar
            };
            let (outcome, _) = solve(&world, strategy, &policy);
            let solution = outcome.unwrap().unwrap();
            assert_plan_valid(&world, &solution);
            prop_assert_eq!(solution.cost(), i64::from(bfs.depth()));
        }
    }

    #[test]
    fn estimates_never_exceed_true_cost(walk in prop::collection::vec(0usize..4, 0..10)) {
        let board = scramble(&walk);
        let world = EightPuzzle::new(board).unwrap();
        let (outcome, _) = solve(&world, StrategyV1::BreadthFirst, &SearchPolicyV1::default());
        let optimal = i64::from(outcome.unwrap().unwrap().depth());

        prop_assert!(misplaced_tiles(&board) <= manhattan_distance(&board));
        prop_assert!(manhattan_distance(&board) <= optimal);
    }
}
