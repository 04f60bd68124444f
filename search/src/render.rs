//! Human-readable rendering of solutions.
//!
//! Output format (one transition per line):
//!
//! ```text
//! cost: 2
//! depth: 2
//! nodes considered: 4
//! trajectory:
//!   'S' --'A'--> 'A'
//!   'A' --'G'--> 'G'
//! ```

use std::fmt;

use crate::search::Solution;

impl<S: fmt::Debug, A: fmt::Debug> fmt::Display for Solution<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cost: {}", self.cost())?;
        writeln!(f, "depth: {}", self.depth())?;
        writeln!(f, "nodes considered: {}", self.nodes_considered)?;
        writeln!(f, "trajectory:")?;
        for (from, action, to) in self.plan().transitions() {
            writeln!(f, "  {from:?} --{action:?}--> {to:?}")?;
        }
        Ok(())
    }
}
