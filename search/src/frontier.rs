//! Priority frontier for uniform-cost and A* search.
//!
//! A state may sit in the queue several times with different priorities.
//! Entries are never decreased or removed in place; the cheapest one simply
//! pops first.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::node::Node;

/// The frontier ordering key: `(priority, depth, insertion_order)`.
///
/// Lower priority first, then shallower depth, then older insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: i64,
    pub depth: u32,
    pub insertion_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.depth.cmp(&other.depth))
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior.
#[derive(Debug)]
struct FrontierEntry<S, A> {
    key: Reverse<FrontierKey>,
    node: Rc<Node<S, A>>,
}

impl<S, A> PartialEq for FrontierEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for FrontierEntry<S, A> {}

impl<S, A> PartialOrd for FrontierEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for FrontierEntry<S, A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier over shared nodes.
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<FrontierEntry<S, A>>,
    next_insertion: u64,
}

impl<S, A> PriorityFrontier<S, A> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
        }
    }

    /// Push a node with the given priority.
    ///
    /// Duplicate states are accepted; callers gate pushes on their own
    /// best-cost map.
    pub fn push(&mut self, priority: i64, node: Rc<Node<S, A>>) {
        let key = FrontierKey {
            priority,
            depth: node.depth(),
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
    }

    /// Pop the lowest-key entry, returning its priority and node.
    #[must_use]
    pub fn pop(&mut self) -> Option<(i64, Rc<Node<S, A>>)> {
        self.heap.pop().map(|e| (e.key.0.priority, e.node))
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<S, A> Default for PriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
