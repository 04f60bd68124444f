//! Harness runner: pose a world as a problem, run one strategy, report.
//!
//! Every run builds a fresh `SearchProblem`, so `nodes_considered` is always
//! the effort of that run alone. Reports are canonical-JSON artifacts; equal
//! inputs give byte-identical reports and equal digests.

use std::fmt;
use std::str::FromStr;

use log::debug;

use waypoint_search::error::SearchError;
use waypoint_search::policy::SearchPolicyV1;
use waypoint_search::problem::SearchProblem;
use waypoint_search::search::{
    astar, breadth_first, depth_first, iterative_deepening, uniform_cost, Solution,
};

use crate::canon::{canonical_hash, canonical_json_bytes, CanonError, DOMAIN_SEARCH_REPORT};
use crate::contract::WorldV1;
use crate::policy::{search_policy_from_json, search_policy_to_json, PolicyError};

/// Report schema identifier, bound into every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// The five search strategies, with stable string ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyV1 {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    UniformCost,
    AStar,
}

impl StrategyV1 {
    /// All strategies, in documentation order.
    pub const ALL: [Self; 5] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::IterativeDeepening,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Stable id used in reports and fixture output.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::IterativeDeepening => "iddfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for StrategyV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyV1 {
    type Err = SearchRunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.id() == s)
            .ok_or_else(|| SearchRunError::UnknownStrategy { id: s.to_string() })
    }
}

/// Error during a harness search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRunError {
    /// The engine rejected the world's model or heuristic.
    Search(SearchError),
    /// The policy document was malformed.
    Policy(PolicyError),
    /// No strategy has this id.
    UnknownStrategy { id: String },
}

impl fmt::Display for SearchRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Policy(e) => write!(f, "{e}"),
            Self::UnknownStrategy { id } => write!(f, "unknown strategy id {id:?}"),
        }
    }
}

impl std::error::Error for SearchRunError {}

impl From<SearchError> for SearchRunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<PolicyError> for SearchRunError {
    fn from(e: PolicyError) -> Self {
        Self::Policy(e)
    }
}

/// Outcome of one harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReportV1 {
    pub world_id: String,
    pub strategy: StrategyV1,
    pub policy: SearchPolicyV1,
    /// Goal tests performed, whether or not a goal was found.
    pub nodes_considered: u64,
    /// `None` when the strategy found no solution.
    pub solution: Option<ReportedSolutionV1>,
}

/// The solution part of a report, with states and actions already encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedSolutionV1 {
    pub cost: i64,
    pub depth: u32,
    /// Alternating `[s0, a1, s1, …, aT, sT]`.
    pub plan: Vec<serde_json::Value>,
}

impl SearchReportV1 {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// The report as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let (cost, depth, plan) = match &self.solution {
            Some(s) => (
                serde_json::json!(s.cost),
                serde_json::json!(s.depth),
                serde_json::Value::Array(s.plan.clone()),
            ),
            None => (
                serde_json::Value::Null,
                serde_json::Value::Null,
                serde_json::Value::Null,
            ),
        };
        serde_json::json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "world_id": self.world_id,
            "strategy": self.strategy.id(),
            "policy": search_policy_to_json(&self.policy),
            "found": self.is_solved(),
            "cost": cost,
            "depth": depth,
            "nodes_considered": self.nodes_considered,
            "plan": plan,
        })
    }

    /// Canonical JSON bytes of [`SearchReportV1::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a world encoded a state or action with a
    /// non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// `"sha256:<hex>"` digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Same as [`SearchReportV1::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<String, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }
}

/// Run `strategy` on `world` under `policy`.
///
/// # Errors
///
/// Returns [`SearchRunError::Search`] if the engine detects a contract
/// violation in the world's model or heuristic.
pub fn run_search<W: WorldV1>(
    world: &W,
    strategy: StrategyV1,
    policy: &SearchPolicyV1,
) -> Result<SearchReportV1, SearchRunError> {
    debug!("run_search: world={} strategy={strategy}", world.world_id());

    let goal = |s: &W::State| world.is_goal(s);
    let problem = SearchProblem::new(world.initial_state(), goal, world);
    let outcome = match strategy {
        StrategyV1::BreadthFirst => breadth_first(&problem),
        StrategyV1::DepthFirst => depth_first(&problem, policy.max_depth),
        StrategyV1::IterativeDeepening => iterative_deepening(&problem, policy.deepening_ceiling),
        StrategyV1::UniformCost => uniform_cost(&problem),
        StrategyV1::AStar => astar(&problem, |node| world.heuristic(node)),
    }?;

    Ok(SearchReportV1 {
        world_id: world.world_id().to_string(),
        strategy,
        policy: *policy,
        nodes_considered: problem.nodes_considered(),
        solution: outcome.map(|solution| report_solution(world, &solution)),
    })
}

/// Decode `policy_json` and run. A malformed policy fails before any search.
///
/// # Errors
///
/// Returns [`SearchRunError::Policy`] for a malformed policy, otherwise as
/// [`run_search`].
pub fn run_search_json<W: WorldV1>(
    world: &W,
    strategy: StrategyV1,
    policy_json: &serde_json::Value,
) -> Result<SearchReportV1, SearchRunError> {
    let policy = search_policy_from_json(policy_json)?;
    run_search(world, strategy, &policy)
}

fn report_solution<W: WorldV1>(
    world: &W,
    solution: &Solution<W::State, W::Action>,
) -> ReportedSolutionV1 {
    let plan = solution.plan();
    let mut encoded = Vec::with_capacity(plan.len() * 2 + 1);
    encoded.push(world.encode_state(plan.initial_state()));
    for (_, action, to) in plan.transitions() {
        encoded.push(world.encode_action(action));
        encoded.push(world.encode_state(to));
    }
    ReportedSolutionV1 {
        cost: solution.cost(),
        depth: solution.depth(),
        plan: encoded,
    }
}
