//! Basis initializer (§4.1): builds the star tree rooted at the synthetic
//! node so invariants 1-7 hold trivially before the first pivot.

use crate::config::SolverConfig;
use crate::graph::GraphState;
use crate::tree::TreeState;
use crate::types::{ArcState, FlowNum, NONE};

pub fn build_initial_basis<F: FlowNum>(graph: &mut GraphState<F>, tree: &mut TreeState<F>, config: &SolverConfig<F>) {
    let root = graph.root;
    let n = graph.n;

    for u in 0..n {
        let e = graph.artificial_arc_of(u);
        let supply_u = graph.supply[u];
        if supply_u >= F::zero() {
            graph.source[e] = u;
            graph.target[e] = root;
            graph.flow[e] = supply_u;
            graph.cost[e] = F::zero();
            tree.forward[u] = true;
            tree.pi[u] = F::zero();
        } else {
            graph.source[e] = root;
            graph.target[e] = u;
            graph.flow[e] = -supply_u;
            graph.cost[e] = config.art_cost;
            tree.forward[u] = false;
            tree.pi[u] = config.art_cost;
        }
        graph.capacity[e] = config.inf_capacity;
        graph.state[e] = ArcState::Tree;

        tree.parent[u] = root;
        tree.pred[u] = e;
        tree.thread[u] = u + 1;
        tree.succ_num[u] = 1;
        tree.last_succ[u] = u;
        tree.depth[u] = 1;
    }

    tree.parent[root] = NONE;
    tree.thread[root] = 0;
    tree.pi[root] = F::zero();
    tree.succ_num[root] = n + 1;
    tree.last_succ[root] = if n == 0 { root } else { n - 1 };
    tree.depth[root] = 0;

    for u in 0..=n {
        tree.rev_thread[tree.thread[u]] = u;
    }
}
