//! Typed search errors.
//!
//! `SearchError` represents contract violations detected by the engine.
//! "No solution" is not an error: strategies report it as `Ok(None)`.
//! Panics raised inside a domain model are not caught and reach the caller
//! unmodified.

/// Typed failure for a search run.
///
/// Every variant identifies a model (or heuristic) that broke its contract.
/// Search is deterministic, so retrying the same call reproduces the same
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The model reported a negative cost for a transition.
    NegativeStepCost {
        /// Depth of the child node the transition would have produced.
        depth: u32,
        /// The offending cost.
        cost: i64,
    },
    /// The heuristic returned a negative remaining-cost estimate.
    NegativeHeuristic { depth: u32, estimate: i64 },
    /// Cumulative cost (or cost plus heuristic) overflowed `i64`.
    CostOverflow { depth: u32 },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeStepCost { depth, cost } => {
                write!(f, "model returned negative step cost {cost} at depth {depth}")
            }
            Self::NegativeHeuristic { depth, estimate } => {
                write!(
                    f,
                    "heuristic returned negative estimate {estimate} at depth {depth}"
                )
            }
            Self::CostOverflow { depth } => {
                write!(f, "cumulative cost overflowed i64 at depth {depth}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
