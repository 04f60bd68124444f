//! Search problem: initial state + goal predicate + model.

use std::cell::Cell;

use crate::contract::SearchModel;

/// A search problem instance.
///
/// Binds an initial state, a goal predicate and a [`SearchModel`]. The only
/// mutable part is `nodes_considered`, which counts calls to
/// [`SearchProblem::is_goal`] and is the sole measure of search effort.
///
/// The counter lives in a `Cell`, so a problem is `!Sync`: one instance
/// cannot be shared by concurrent searches. Build one problem per search.
pub struct SearchProblem<M: SearchModel, G> {
    initial_state: M::State,
    goal: G,
    model: M,
    nodes_considered: Cell<u64>,
}

impl<M, G> SearchProblem<M, G>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
{
    /// Create a problem with a zeroed `nodes_considered` counter.
    pub fn new(initial_state: M::State, goal: G, model: M) -> Self {
        Self {
            initial_state,
            goal,
            model,
            nodes_considered: Cell::new(0),
        }
    }

    /// Goal test. Every call increments `nodes_considered`.
    pub fn is_goal(&self, state: &M::State) -> bool {
        self.nodes_considered.set(self.nodes_considered.get() + 1);
        (self.goal)(state)
    }

    #[must_use]
    pub fn initial_state(&self) -> &M::State {
        &self.initial_state
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Number of goal tests performed so far.
    #[must_use]
    pub fn nodes_considered(&self) -> u64 {
        self.nodes_considered.get()
    }
}
