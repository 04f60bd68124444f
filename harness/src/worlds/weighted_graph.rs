//! `WeightedGraph`: an explicit directed graph with weighted edges.
//!
//! Vertices are named; states are vertex indices and actions are edge
//! indices, so parallel edges with different costs stay distinct. Outgoing
//! edges are offered in insertion order. Edge costs are passed through
//! unchecked, which makes this world useful for exercising the engine's
//! contract checks as well as its optimality.

use waypoint_search::contract::SearchModel;
use waypoint_search::node::Node;

use crate::contract::WorldV1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    from: usize,
    to: usize,
    cost: i64,
}

/// Search-capable weighted digraph world.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    names: Vec<String>,
    edges: Vec<Edge>,
    estimates: Vec<i64>,
    start: usize,
    goal: usize,
}

impl WeightedGraph {
    /// Build a graph from `(from, to, cost)` triples.
    ///
    /// Vertices are created on first mention; `start` and `goal` need not
    /// appear in any edge.
    #[must_use]
    pub fn new(start: &str, goal: &str, edges: &[(&str, &str, i64)]) -> Self {
        let mut graph = Self {
            names: Vec::new(),
            edges: Vec::with_capacity(edges.len()),
            estimates: Vec::new(),
            start: 0,
            goal: 0,
        };
        graph.start = graph.vertex(start);
        graph.goal = graph.vertex(goal);
        for &(from, to, cost) in edges {
            let from = graph.vertex(from);
            let to = graph.vertex(to);
            graph.edges.push(Edge { from, to, cost });
        }
        graph
    }

    /// `S→A 1, S→B 4, A→B 1, A→G 6, B→G 1` with exact estimates to `G`.
    ///
    /// Fewest edges: `S A G` (cost 7). Cheapest: `S A B G` (cost 3).
    #[must_use]
    pub fn diamond() -> Self {
        Self::new(
            "S",
            "G",
            &[
                ("S", "A", 1),
                ("S", "B", 4),
                ("A", "B", 1),
                ("A", "G", 6),
                ("B", "G", 1),
            ],
        )
        .with_estimates(&[("S", 3), ("A", 2), ("B", 1)])
    }

    /// Replace the goal vertex, creating it if unknown (and then unreachable).
    #[must_use]
    pub fn with_goal(mut self, goal: &str) -> Self {
        self.goal = self.vertex(goal);
        self
    }

    /// Set A* estimates per vertex; unlisted vertices estimate 0.
    #[must_use]
    pub fn with_estimates(mut self, estimates: &[(&str, i64)]) -> Self {
        for &(name, estimate) in estimates {
            let vertex = self.vertex(name);
            self.estimates[vertex] = estimate;
        }
        self
    }

    /// Name of vertex `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    fn vertex(&mut self, name: &str) -> usize {
        if let Some(index) = self.names.iter().position(|n| n == name) {
            return index;
        }
        self.names.push(name.to_string());
        self.estimates.push(0);
        self.names.len() - 1
    }
}

impl SearchModel for WeightedGraph {
    type State = usize;
    type Action = usize;

    fn legal_actions(&self, state: &usize) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.from == *state)
            .map(|(index, _)| index)
            .collect()
    }

    fn successor(&self, _state: &usize, action: &usize) -> usize {
        self.edges[*action].to
    }

    fn step_cost(&self, _state: &usize, action: &usize) -> i64 {
        self.edges[*action].cost
    }
}

impl WorldV1 for WeightedGraph {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "weighted_graph"
    }

    fn initial_state(&self) -> usize {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, node: &Node<usize, usize>) -> i64 {
        self.estimates[*node.state()]
    }

    fn encode_state(&self, state: &usize) -> serde_json::Value {
        serde_json::json!(self.name(*state))
    }

    fn encode_action(&self, action: &usize) -> serde_json::Value {
        serde_json::json!(self.name(self.edges[*action].to))
    }
}
