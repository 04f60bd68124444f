//! Search model contract trait.

use std::hash::Hash;

/// Trait for domains that can be searched.
///
/// A model describes which actions are legal in a state, what state an action
/// leads to, and what the transition costs. It holds no search bookkeeping;
/// the engine only ever calls it through shared references.
///
/// # Contract
///
/// - `legal_actions` must be deterministic: same state → same actions in the
///   same order. Strategies rely on this order for tie-breaking.
/// - `successor` and `step_cost` are only called with actions returned by
///   `legal_actions` for that same state. Behaviour for any other action is
///   up to the model (panicking is acceptable and reaches the caller as-is).
/// - `step_cost` must be non-negative. A negative cost aborts the search with
///   [`crate::error::SearchError::NegativeStepCost`].
pub trait SearchModel {
    /// Domain state. Used as a key in visited sets and best-cost maps.
    type State: Clone + Eq + Hash;

    /// Transition label, kept on nodes for plan reconstruction.
    type Action;

    /// Enumerate all actions applicable in `state`.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of applying `action` in `state`. Unit cost unless overridden.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action) -> i64 {
        1
    }
}

impl<M: SearchModel + ?Sized> SearchModel for &M {
    type State = M::State;
    type Action = M::Action;

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        (**self).legal_actions(state)
    }

    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        (**self).successor(state, action)
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> i64 {
        (**self).step_cost(state, action)
    }
}
