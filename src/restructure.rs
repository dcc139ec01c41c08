//! Tree restructurer (§4.7): re-roots the subtree that was attached via the
//! leaving arc so it instead attaches to `v_in` via the entering arc, then
//! re-establishes the thread order (invariant 5).
//!
//! Steps 1-2 (parent/pred/forward chain reversal) follow §4.7 exactly.
//! Steps 3-4 (thread order, succ_num, last_succ) are instead re-derived from
//! scratch by a single linear-time traversal of the corrected `parent`
//! array, rather than the incremental splice §4.7 describes — same
//! asymptotic cost, same resulting invariants. See DESIGN.md.

use crate::graph::GraphState;
use crate::tree::TreeState;
use crate::types::FlowNum;

/// Reverses the parent/pred/forward chain along the old path from `u_in` up
/// to `u_out` (§4.7 step 1). `u_out` must be an ancestor-or-self of `u_in`
/// under the *old* `parent` pointers.
fn reverse_stem<F: FlowNum>(tree: &mut TreeState<F>, u_in: usize, u_out: usize) {
    if u_in == u_out {
        return;
    }
    let mut chain = Vec::new();
    let mut x = u_in;
    loop {
        chain.push(x);
        if x == u_out {
            break;
        }
        x = tree.parent[x];
    }
    // Snapshot every `pred`/`forward` this loop will read *before* any of
    // them are overwritten — `chain[i+1]`'s new values are derived from
    // `chain[i]`'s old ones, but `chain[i]` is itself overwritten one
    // iteration earlier, so reading in place aliases the just-written value.
    let old_pred: Vec<usize> = chain[..chain.len() - 1].iter().map(|&c| tree.pred[c]).collect();
    let old_forward: Vec<bool> = chain[..chain.len() - 1].iter().map(|&c| tree.forward[c]).collect();
    for i in 0..chain.len() - 1 {
        let child = chain[i];
        let old_parent = chain[i + 1];
        tree.parent[old_parent] = child;
        tree.pred[old_parent] = old_pred[i];
        tree.forward[old_parent] = !old_forward[i];
    }
}

/// Rebuilds `thread`, `rev_thread`, `succ_num`, `last_succ` and `depth` for
/// the whole tree from the (now-correct) `parent` array (§4.7 steps 3-4).
/// `node_count` is `n + 1`.
fn rebuild_thread_order<F: FlowNum>(tree: &mut TreeState<F>, root: usize, node_count: usize) {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for v in 0..node_count {
        if v != root {
            children[tree.parent[v]].push(v);
        }
    }

    let mut order = Vec::with_capacity(node_count);
    let mut stack = vec![root];
    while let Some(u) = stack.pop() {
        order.push(u);
        for &c in children[u].iter().rev() {
            stack.push(c);
        }
    }
    debug_assert_eq!(order.len(), node_count);

    for i in 0..order.len() {
        let cur = order[i];
        let next = order[(i + 1) % order.len()];
        tree.thread[cur] = next;
        tree.rev_thread[next] = cur;
    }

    let mut pos = vec![0usize; node_count];
    for (i, &u) in order.iter().enumerate() {
        pos[u] = i;
    }

    for v in 0..node_count {
        tree.succ_num[v] = 1;
    }
    // A node always appears later in a pre-order than its parent, so
    // folding sizes upward while scanning the order in reverse guarantees
    // every child is finalized before its parent is touched.
    for i in (0..order.len()).rev() {
        let u = order[i];
        if u != root {
            let p = tree.parent[u];
            tree.succ_num[p] += tree.succ_num[u];
        }
    }

    for v in 0..node_count {
        let last_idx = pos[v] + tree.succ_num[v] - 1;
        tree.last_succ[v] = order[last_idx];
    }

    tree.depth[root] = 0;
    for &u in order.iter() {
        if u != root {
            tree.depth[u] = tree.depth[tree.parent[u]] + 1;
        }
    }
}

/// Performs the full restructure for one pivot: reattaches `u_in`'s subtree
/// to `v_in` via `in_arc`, then rebuilds the thread order.
pub(crate) fn restructure<F: FlowNum>(
    graph: &GraphState<F>,
    tree: &mut TreeState<F>,
    u_in: usize,
    v_in: usize,
    u_out: usize,
    in_arc: usize,
    root: usize,
    node_count: usize,
) {
    reverse_stem(tree, u_in, u_out);

    tree.parent[u_in] = v_in;
    tree.pred[u_in] = in_arc;
    tree.forward[u_in] = graph.source[in_arc] == u_in;

    rebuild_thread_order(tree, root, node_count);
}
