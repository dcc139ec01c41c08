//! Tree state (§3): the parallel arrays encoding the rooted spanning-tree
//! basis and its thread-order (pre-order DFS) linearization.

use crate::types::{FlowNum, NONE};

pub struct TreeState<F> {
    pub parent: Vec<usize>,
    /// Arc id whose endpoints are `{parent[u], u}` — the basis arc of `u`.
    pub pred: Vec<usize>,
    /// True iff `pred[u]` is directed `parent[u] -> u`.
    pub forward: Vec<bool>,
    /// Next node in the fixed pre-order traversal; cyclic over all tree nodes.
    pub thread: Vec<usize>,
    /// Inverse of `thread`.
    pub rev_thread: Vec<usize>,
    /// Size of the subtree rooted at `u` (self inclusive).
    pub succ_num: Vec<usize>,
    /// Last node, in thread order, belonging to `u`'s subtree.
    pub last_succ: Vec<usize>,
    /// Distance to root.
    pub depth: Vec<usize>,
    /// Node potential (dual variable).
    pub pi: Vec<F>,
}

impl<F: FlowNum> TreeState<F> {
    /// `node_count` is `n + 1` (user nodes plus the synthetic root).
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: vec![NONE; node_count],
            pred: vec![NONE; node_count],
            forward: vec![true; node_count],
            thread: vec![0; node_count],
            rev_thread: vec![0; node_count],
            succ_num: vec![1; node_count],
            last_succ: (0..node_count).collect(),
            depth: vec![0; node_count],
            pi: vec![F::zero(); node_count],
        }
    }
}
