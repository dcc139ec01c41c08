//! Potential updater (§4.8): applies the uniform shift σ to the moved
//! subtree so the new tree arc satisfies reduced-cost = 0.

use crate::graph::GraphState;
use crate::tree::TreeState;
use crate::types::FlowNum;

pub(crate) fn update_potentials<F: FlowNum>(graph: &GraphState<F>, tree: &mut TreeState<F>, u_in: usize, v_in: usize, in_arc: usize) {
    let sigma = if tree.forward[u_in] {
        tree.pi[v_in] - tree.pi[u_in] - graph.cost[in_arc]
    } else {
        tree.pi[v_in] - tree.pi[u_in] + graph.cost[in_arc]
    };
    if sigma == F::zero() {
        return;
    }
    let mut x = u_in;
    for _ in 0..tree.succ_num[u_in] {
        tree.pi[x] += sigma;
        x = tree.thread[x];
    }
}
