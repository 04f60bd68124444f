//! Search policy types.

/// Default iterative-deepening ceiling.
pub const DEFAULT_DEEPENING_CEILING: u32 = 20;

/// Depth configuration for the depth-bounded strategies.
///
/// Breadth-first, uniform-cost and A* search ignore it. Depths are unsigned,
/// so a negative limit cannot be expressed; JSON configuration rejects one
/// before a policy is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Depth cutoff for depth-first search (`None` = unbounded).
    pub max_depth: Option<u32>,
    /// Deepest limit tried by iterative deepening (inclusive).
    pub deepening_ceiling: u32,
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_depth: None,
            deepening_ceiling: DEFAULT_DEEPENING_CEILING,
        }
    }
}
