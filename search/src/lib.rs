//! Waypoint Search: generic state-space search over pluggable domain models.
//!
//! This crate is the engine. It depends on no domain; worlds live in
//! `waypoint_harness` and plug in through [`SearchModel`].
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_search  ←  waypoint_harness
//! (model, nodes,      (worlds, runner,
//!  strategies)         reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchModel`]: legal actions, successor function, step cost
//! - [`SearchProblem`]: initial state + goal predicate + model, with the
//!   `nodes_considered` goal-test counter
//! - [`Node`]: immutable search-tree node with shared parent links
//! - [`Solution`]: a goal node stamped with the search effort
//! - [`SearchPolicyV1`]: depth limits for the depth-bounded strategies
//!
//! # Strategies
//!
//! [`breadth_first`], [`depth_first`], [`iterative_deepening`],
//! [`uniform_cost`] and [`astar`]. Each returns `Ok(Some(solution))`,
//! `Ok(None)` when no goal is reachable, or a [`SearchError`] when the model
//! breaks its contract.
//!
//! [`SearchModel`]: contract::SearchModel
//! [`SearchProblem`]: problem::SearchProblem
//! [`Node`]: node::Node
//! [`Solution`]: search::Solution
//! [`SearchPolicyV1`]: policy::SearchPolicyV1
//! [`SearchError`]: error::SearchError
//! [`breadth_first`]: search::breadth_first
//! [`depth_first`]: search::depth_first
//! [`iterative_deepening`]: search::iterative_deepening
//! [`uniform_cost`]: search::uniform_cost
//! [`astar`]: search::astar

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod problem;
pub mod render;
pub mod search;
