//! Search strategies.
//!
//! All five strategies share node expansion, goal testing and plan
//! reconstruction. They differ only in frontier discipline and in how
//! revisits are gated:
//!
//! | strategy | frontier | visited | goal test |
//! |---|---|---|---|
//! | breadth-first | FIFO | state set | at generation |
//! | depth-first | LIFO | state → shallowest depth | at pop |
//! | uniform-cost | min-heap on `g` | state → best `g` | at pop |
//! | A* | min-heap on `g + h` | state → best `g` | at pop |

use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use log::{debug, trace};

use crate::contract::SearchModel;
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::node::{Node, Plan};
use crate::problem::SearchProblem;

/// A goal node together with the search effort spent reaching it.
///
/// `nodes_considered` is the problem's goal-test counter at the moment the
/// goal was returned.
#[derive(Debug)]
pub struct Solution<S, A> {
    /// The goal node; its ancestor chain is the plan.
    pub node: Rc<Node<S, A>>,
    /// Goal tests performed before the search returned.
    pub nodes_considered: u64,
}

impl<S, A> Solution<S, A> {
    #[must_use]
    pub fn state(&self) -> &S {
        self.node.state()
    }

    #[must_use]
    pub fn cost(&self) -> i64 {
        self.node.cost()
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.node.depth()
    }

    /// The full `[s0, a1, s1, …, aT, sT]` plan to the goal.
    #[must_use]
    pub fn plan(&self) -> Plan<'_, S, A> {
        self.node.generate_plan()
    }
}

impl<S, A> Clone for Solution<S, A> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
            nodes_considered: self.nodes_considered,
        }
    }
}

/// Result of a strategy: `Ok(None)` means the space was exhausted (or the
/// depth bound reached) without finding a goal.
pub type SearchOutcome<M> = Result<
    Option<Solution<<M as SearchModel>::State, <M as SearchModel>::Action>>,
    SearchError,
>;

/// Breadth-first search.
///
/// Children are goal-tested as they are generated, so the first goal found
/// has minimum depth. The root is tested once before the loop.
///
/// # Errors
///
/// Returns [`SearchError`] if the model violates its cost contract.
pub fn breadth_first<M, G>(problem: &SearchProblem<M, G>) -> SearchOutcome<M>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
{
    const STRATEGY: &str = "breadth_first";
    debug!("{STRATEGY}: start");

    let root = Rc::new(Node::root(problem.initial_state().clone()));
    if problem.is_goal(root.state()) {
        return Ok(found(STRATEGY, root, problem.nodes_considered()));
    }

    let mut frontier = VecDeque::from([root]);
    let mut visited: HashSet<M::State> = HashSet::from([problem.initial_state().clone()]);

    while let Some(current) = frontier.pop_front() {
        trace!(
            "{STRATEGY}: expand depth={} frontier={}",
            current.depth(),
            frontier.len()
        );
        for child in Node::expand(&current, problem.model()) {
            let child = child?;
            if visited.contains(child.state()) {
                continue;
            }
            if problem.is_goal(child.state()) {
                return Ok(found(STRATEGY, child, problem.nodes_considered()));
            }
            visited.insert(child.state().clone());
            frontier.push_back(child);
        }
    }

    Ok(exhausted(STRATEGY, problem.nodes_considered()))
}

/// Depth-first search with an optional depth cutoff.
///
/// A state is re-entered only when reached at a strictly shallower depth than
/// before. Nodes at `max_depth` are goal-tested but not expanded.
///
/// # Errors
///
/// Returns [`SearchError`] if the model violates its cost contract.
pub fn depth_first<M, G>(
    problem: &SearchProblem<M, G>,
    max_depth: Option<u32>,
) -> SearchOutcome<M>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
{
    const STRATEGY: &str = "depth_first";
    debug!("{STRATEGY}: start max_depth={max_depth:?}");

    let mut frontier = vec![Rc::new(Node::root(problem.initial_state().clone()))];
    let mut visited: HashMap<M::State, u32> =
        HashMap::from([(problem.initial_state().clone(), 0)]);

    while let Some(current) = frontier.pop() {
        if problem.is_goal(current.state()) {
            return Ok(found(STRATEGY, current, problem.nodes_considered()));
        }
        if max_depth == Some(current.depth()) {
            continue;
        }
        trace!(
            "{STRATEGY}: expand depth={} frontier={}",
            current.depth(),
            frontier.len()
        );
        for child in Node::expand(&current, problem.model()) {
            let child = child?;
            if visited
                .get(child.state())
                .is_some_and(|&seen| seen <= child.depth())
            {
                continue;
            }
            visited.insert(child.state().clone(), child.depth());
            frontier.push(child);
        }
    }

    Ok(exhausted(STRATEGY, problem.nodes_considered()))
}

/// Iterative-deepening depth-first search.
///
/// Runs [`depth_first`] with limits `0, 1, …, ceiling` (inclusive) and returns
/// the first solution. Shallow levels are re-explored on every iteration, and
/// `nodes_considered` accumulates across iterations.
///
/// A ceiling of `c` tries `c + 1` limits: the default ceiling of 20 runs 21
/// bounded searches, the last one at depth 20.
///
/// # Errors
///
/// Returns [`SearchError`] if the model violates its cost contract.
pub fn iterative_deepening<M, G>(
    problem: &SearchProblem<M, G>,
    ceiling: u32,
) -> SearchOutcome<M>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
{
    for limit in 0..=ceiling {
        if let Some(solution) = depth_first(problem, Some(limit))? {
            debug!("iterative_deepening: solved at limit {limit}");
            return Ok(Some(solution));
        }
    }
    Ok(exhausted("iterative_deepening", problem.nodes_considered()))
}

/// Uniform-cost search: best-first on cumulative cost.
///
/// Optimal when every step cost is non-negative.
///
/// # Errors
///
/// Returns [`SearchError`] if the model violates its cost contract.
pub fn uniform_cost<M, G>(problem: &SearchProblem<M, G>) -> SearchOutcome<M>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
{
    best_first(problem, "uniform_cost", |_| 0)
}

/// A* search: best-first on cumulative cost plus `heuristic(node)`.
///
/// The best-cost map still records raw cumulative cost. Optimality holds only
/// for admissible heuristics; that is the caller's responsibility and is not
/// checked.
///
/// # Errors
///
/// Returns [`SearchError::NegativeHeuristic`] if the heuristic returns a
/// negative estimate, or another [`SearchError`] if the model violates its
/// cost contract.
pub fn astar<M, G, H>(problem: &SearchProblem<M, G>, heuristic: H) -> SearchOutcome<M>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
    H: Fn(&Node<M::State, M::Action>) -> i64,
{
    best_first(problem, "astar", heuristic)
}

/// Shared uniform-cost / A* loop.
///
/// A state may be queued several times. A push happens only when it improves
/// the best cost recorded for the state; stale entries still pop later and
/// are expanded again.
fn best_first<M, G, H>(
    problem: &SearchProblem<M, G>,
    strategy: &str,
    heuristic: H,
) -> SearchOutcome<M>
where
    M: SearchModel,
    G: Fn(&M::State) -> bool,
    H: Fn(&Node<M::State, M::Action>) -> i64,
{
    debug!("{strategy}: start");

    let root = Rc::new(Node::root(problem.initial_state().clone()));
    let mut frontier = PriorityFrontier::new();
    frontier.push(priority(&root, &heuristic)?, root);
    let mut best_cost: HashMap<M::State, i64> =
        HashMap::from([(problem.initial_state().clone(), 0)]);

    while let Some((key, current)) = frontier.pop() {
        trace!(
            "{strategy}: pop priority={key} cost={} depth={} frontier={}",
            current.cost(),
            current.depth(),
            frontier.len()
        );
        if problem.is_goal(current.state()) {
            return Ok(found(strategy, current, problem.nodes_considered()));
        }
        for child in Node::expand(&current, problem.model()) {
            let child = child?;
            if best_cost
                .get(child.state())
                .is_some_and(|&best| best <= child.cost())
            {
                continue;
            }
            let child_priority = priority(&child, &heuristic)?;
            best_cost.insert(child.state().clone(), child.cost());
            frontier.push(child_priority, child);
        }
    }

    Ok(exhausted(strategy, problem.nodes_considered()))
}

/// `cost + heuristic(node)`, rejecting negative estimates.
fn priority<S, A, H>(node: &Node<S, A>, heuristic: &H) -> Result<i64, SearchError>
where
    H: Fn(&Node<S, A>) -> i64,
{
    let depth = node.depth();
    let estimate = heuristic(node);
    if estimate < 0 {
        return Err(SearchError::NegativeHeuristic { depth, estimate });
    }
    node.cost()
        .checked_add(estimate)
        .ok_or(SearchError::CostOverflow { depth })
}

fn found<S, A>(
    strategy: &str,
    node: Rc<Node<S, A>>,
    nodes_considered: u64,
) -> Option<Solution<S, A>> {
    debug!(
        "{strategy}: goal at depth={} cost={} nodes_considered={nodes_considered}",
        node.depth(),
        node.cost()
    );
    Some(Solution {
        node,
        nodes_considered,
    })
}

fn exhausted<S, A>(strategy: &str, nodes_considered: u64) -> Option<Solution<S, A>> {
    debug!("{strategy}: no solution, nodes_considered={nodes_considered}");
    None
}
