//! World contract: the minimal trait a world must implement to be run.
//!
//! A world is a [`SearchModel`] plus everything needed to pose a problem on
//! it: a start state, a goal test, an optional heuristic, and JSON encodings
//! of its states and actions for reports. Worlds may NOT implement search,
//! counting, or digesting; those are engine and runner concerns.

use waypoint_search::contract::SearchModel;
use waypoint_search::node::Node;

/// The contract a world must implement to be run by the harness runner.
pub trait WorldV1: SearchModel {
    /// Unique world identifier (e.g., `"eight_puzzle"`).
    fn world_id(&self) -> &str;

    /// The state every run starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the world's goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Remaining-cost estimate used by A*. Must be non-negative; admissible
    /// estimates keep A* optimal. Defaults to zero (A* = uniform-cost).
    fn heuristic(&self, _node: &Node<Self::State, Self::Action>) -> i64 {
        0
    }

    /// JSON encoding of a state for reports. Integers only (see `canon`).
    fn encode_state(&self, state: &Self::State) -> serde_json::Value;

    /// JSON encoding of an action for reports.
    fn encode_action(&self, action: &Self::Action) -> serde_json::Value;
}
