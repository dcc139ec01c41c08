//! Leaving-arc / cycle augmenter (§4.5) and flow augmentation (§4.6).
//!
//! The two tree-paths from the entering arc's endpoints up to their join
//! are walked with the *exact* signed residual/update formulas §4.6 gives
//! for flow augmentation; the leaving-arc search (§4.5) reuses those same
//! per-node sign rules so the two stay in lockstep by construction instead
//! of by re-derivation.

use crate::graph::GraphState;
use crate::tree::TreeState;
use crate::types::{ArcState, FlowNum, NONE};

/// `c_sign(u)` on the source-endpoint path: the flow on `pred[u]` changes by
/// `c_sign(u) * delta` (§4.6: `forward[u] ? -state*delta : +state*delta`).
#[inline]
fn k_path_sign(forward: bool, entering_state_positive: bool) -> bool {
    // true => flow increases (toward capacity), false => flow decreases (toward zero)
    if forward {
        !entering_state_positive
    } else {
        entering_state_positive
    }
}

/// `c_sign(u)` on the target-endpoint path (§4.6:
/// `forward[u] ? +state*delta : -state*delta`).
#[inline]
fn l_path_sign(forward: bool, entering_state_positive: bool) -> bool {
    if forward {
        entering_state_positive
    } else {
        !entering_state_positive
    }
}

#[inline]
fn residual_for<F: FlowNum>(graph: &GraphState<F>, arc: usize, increasing: bool) -> F {
    if increasing {
        graph.capacity[arc] - graph.flow[arc]
    } else {
        graph.flow[arc]
    }
}

pub(crate) struct LeavingArc<F> {
    pub delta: F,
    pub leaving_arc: usize,
    /// Endpoint of the entering arc whose subtree moves.
    pub u_in: usize,
    /// The other endpoint; new attachment point for `u_in`'s subtree.
    pub v_in: usize,
    /// Node whose `pred` arc is the one leaving the basis.
    pub u_out: usize,
}

/// Determines δ and the leaving arc for the cycle formed by adding
/// `entering_arc` (§4.5). Returns `delta >= inf_capacity` when the cycle is
/// unbounded (§7 UNBOUNDED).
pub(crate) fn find_leaving_arc<F: FlowNum>(
    graph: &GraphState<F>,
    tree: &TreeState<F>,
    entering_arc: usize,
    join: usize,
    inf_capacity: F,
) -> LeavingArc<F> {
    let k = graph.source[entering_arc];
    let l = graph.target[entering_arc];
    let entering_positive = graph.state[entering_arc] == ArcState::Lower;

    // "First" path uses the strict tie-break, "second" the non-strict one
    // (§4.5); which physical endpoint is first flips with the entering
    // arc's state.
    let (first, second) = if entering_positive { (k, l) } else { (l, k) };

    let mut delta = inf_capacity;
    let mut u_out = NONE;
    let mut on_first = true;

    let mut u = first;
    while u != join {
        let arc = tree.pred[u];
        let increasing = if first == k {
            k_path_sign(tree.forward[u], entering_positive)
        } else {
            l_path_sign(tree.forward[u], entering_positive)
        };
        let r = residual_for(graph, arc, increasing);
        if r < delta {
            delta = r;
            u_out = u;
            on_first = true;
        }
        u = tree.parent[u];
    }

    let mut u = second;
    while u != join {
        let arc = tree.pred[u];
        let increasing = if second == k {
            k_path_sign(tree.forward[u], entering_positive)
        } else {
            l_path_sign(tree.forward[u], entering_positive)
        };
        let r = residual_for(graph, arc, increasing);
        if r <= delta {
            delta = r;
            u_out = u;
            on_first = false;
        }
        u = tree.parent[u];
    }

    let side_start = if on_first { first } else { second };
    let (u_in, v_in) = if side_start == k { (k, l) } else { (l, k) };
    let leaving_arc = if u_out == NONE { entering_arc } else { tree.pred[u_out] };

    LeavingArc {
        delta,
        leaving_arc,
        u_in,
        v_in,
        u_out,
    }
}

/// Applies the cycle augmentation of §4.6: updates `flow` on the entering
/// arc and every tree arc on both root-paths to `join`.
pub(crate) fn augment_flow<F: FlowNum>(graph: &mut GraphState<F>, tree: &TreeState<F>, entering_arc: usize, join: usize, delta: F) {
    if delta == F::zero() {
        return;
    }
    let k = graph.source[entering_arc];
    let l = graph.target[entering_arc];
    let entering_positive = graph.state[entering_arc] == ArcState::Lower;
    let s = graph.state[entering_arc].sign::<F>();

    graph.flow[entering_arc] += s * delta;

    let mut u = k;
    while u != join {
        let arc = tree.pred[u];
        let increasing = k_path_sign(tree.forward[u], entering_positive);
        if increasing {
            graph.flow[arc] += delta;
        } else {
            graph.flow[arc] -= delta;
        }
        u = tree.parent[u];
    }

    let mut u = l;
    while u != join {
        let arc = tree.pred[u];
        let increasing = l_path_sign(tree.forward[u], entering_positive);
        if increasing {
            graph.flow[arc] += delta;
        } else {
            graph.flow[arc] -= delta;
        }
        u = tree.parent[u];
    }
}
