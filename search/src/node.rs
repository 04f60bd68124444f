//! Search tree node, lazy expansion, and plan reconstruction.

use std::rc::Rc;

use crate::contract::SearchModel;
use crate::error::SearchError;

/// An immutable node in the search tree.
///
/// Each non-root node shares ownership of its parent through an `Rc`, so
/// siblings reference one parent and a goal node keeps its whole ancestor
/// chain alive. Branches no longer reachable from a frontier, a visited map
/// or a live descendant are freed as soon as their last `Rc` drops.
///
/// Invariants (enforced by construction):
/// - root: `action == None`, `parent == None`, `cost == 0`, `depth == 0`
/// - child: `cost == parent.cost + step_cost(parent.state, action)` and
///   `depth == parent.depth + 1`
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    action: Option<A>,
    parent: Option<Rc<Node<S, A>>>,
    cost: i64,
    depth: u32,
}

impl<S, A> Node<S, A> {
    /// Create the root node for `state`.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
            parent: None,
            cost: 0,
            depth: 0,
        }
    }

    /// Build the child reached from `parent` by `action`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeStepCost`] if the model prices the
    /// transition below zero, or [`SearchError::CostOverflow`] if the
    /// cumulative cost no longer fits in `i64`.
    pub fn child<M>(parent: &Rc<Self>, model: &M, action: A) -> Result<Self, SearchError>
    where
        M: SearchModel<State = S, Action = A> + ?Sized,
    {
        let depth = parent.depth + 1;
        let step = model.step_cost(&parent.state, &action);
        if step < 0 {
            return Err(SearchError::NegativeStepCost { depth, cost: step });
        }
        let cost = parent
            .cost
            .checked_add(step)
            .ok_or(SearchError::CostOverflow { depth })?;
        let state = model.successor(&parent.state, &action);
        Ok(Self {
            state,
            action: Some(action),
            parent: Some(Rc::clone(parent)),
            cost,
            depth,
        })
    }

    /// Lazily produce one child per legal action, in `legal_actions` order.
    ///
    /// Successors are computed only as the iterator is advanced, so a strategy
    /// that stops at a goal never builds the remaining siblings. Each call
    /// re-queries the model; nothing is cached on the node.
    pub fn expand<'a, M>(
        node: &'a Rc<Self>,
        model: &'a M,
    ) -> impl Iterator<Item = Result<Rc<Self>, SearchError>> + 'a
    where
        M: SearchModel<State = S, Action = A> + ?Sized,
        S: 'a,
        A: 'a,
    {
        model
            .legal_actions(&node.state)
            .into_iter()
            .map(move |action| Self::child(node, model, action).map(Rc::new))
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The action that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Cumulative path cost from the root.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Reconstruct the plan from the root to this node.
    ///
    /// Walks the ancestor chain iteratively, so plan depth is bounded only by
    /// memory, never by the call stack.
    #[must_use]
    pub fn generate_plan(&self) -> Plan<'_, S, A> {
        let capacity = self.depth as usize;
        let mut states = Vec::with_capacity(capacity + 1);
        let mut actions = Vec::with_capacity(capacity);

        states.push(&self.state);
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            if let Some(action) = current.action.as_ref() {
                actions.push(action);
            }
            states.push(&parent.state);
            current = parent;
        }

        states.reverse();
        actions.reverse();
        Plan { states, actions }
    }
}

impl<S, A> Drop for Node<S, A> {
    // Unlink uniquely-owned ancestors one at a time; the default recursive
    // drop would overflow the stack on very deep chains.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            match Rc::try_unwrap(parent) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// The alternating state/action sequence `[s0, a1, s1, …, aT, sT]`.
///
/// Stored as two parallel vectors borrowing from the node chain:
/// `states.len() == actions.len() + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<'a, S, A> {
    states: Vec<&'a S>,
    actions: Vec<&'a A>,
}

impl<'a, S, A> Plan<'a, S, A> {
    /// States `s0 … sT`.
    #[must_use]
    pub fn states(&self) -> &[&'a S] {
        &self.states
    }

    /// Actions `a1 … aT`.
    #[must_use]
    pub fn actions(&self) -> &[&'a A] {
        &self.actions
    }

    /// Number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// `true` for the depth-zero plan (initial state is the goal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn initial_state(&self) -> &'a S {
        self.states[0]
    }

    #[must_use]
    pub fn final_state(&self) -> &'a S {
        self.states[self.states.len() - 1]
    }

    /// Iterate `(from, action, to)` triples in execution order.
    pub fn transitions(&self) -> impl Iterator<Item = (&'a S, &'a A, &'a S)> + '_ {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, action)| (self.states[i], *action, self.states[i + 1]))
    }
}
