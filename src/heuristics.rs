//! Initial heuristic pivots (§4.2): a one-pass heuristic that selects
//! promising real arcs before the main loop starts, to evict artificial
//! arcs quickly. Uses the exact same pivot mechanics as the main loop;
//! correctness never depends on these succeeding.

use crate::config::SolverConfig;
use crate::graph::GraphState;
use crate::pricing::signed_reduced_cost;
use crate::solver::{apply_entering_arc, PivotOutcome};
use crate::tree::TreeState;
use crate::types::{ArcState, FlowNum, NONE};
use std::collections::VecDeque;

/// Returns the number of heuristic pivots actually applied.
pub fn run_initial_pivots<F: FlowNum>(graph: &mut GraphState<F>, tree: &mut TreeState<F>, config: &SolverConfig<F>) -> u64 {
    let candidates = collect_candidates(graph);
    log::trace!("heuristic pivots: {} candidates collected", candidates.len());
    let mut applied = 0u64;
    for arc in candidates {
        if graph.state[arc] == ArcState::Tree {
            continue; // already pulled in by an earlier candidate
        }
        let r = signed_reduced_cost(graph, tree, arc);
        if r >= F::zero() {
            continue;
        }
        if let PivotOutcome::Applied { .. } = apply_entering_arc(graph, tree, arc, config) {
            applied += 1;
        }
    }
    applied
}

fn collect_candidates<F: FlowNum>(graph: &GraphState<F>) -> Vec<usize> {
    let sources: Vec<usize> = (0..graph.n).filter(|&u| graph.supply[u] > F::zero()).collect();
    let sinks: Vec<usize> = (0..graph.n).filter(|&u| graph.supply[u] < F::zero()).collect();

    if sources.len() == 1 && sinks.len() == 1 {
        if let Some(path_arcs) = reverse_path_arcs(graph, sinks[0], sources[0]) {
            return path_arcs;
        }
        return Vec::new();
    }

    if !sinks.is_empty() {
        sinks.iter().filter_map(|&v| cheapest_entering_arc(graph, v)).collect()
    } else {
        sources.iter().filter_map(|&u| cheapest_leaving_arc(graph, u)).collect()
    }
}

/// BFS from `sink` over the reverse (incoming) adjacency, looking for
/// `source`; returns the arcs of *a* source-to-sink path if one exists.
fn reverse_path_arcs<F: FlowNum>(graph: &GraphState<F>, sink: usize, source: usize) -> Option<Vec<usize>> {
    let mut came_from_arc = vec![NONE; graph.n];
    let mut came_from_node = vec![NONE; graph.n];
    let mut visited = vec![false; graph.n];
    visited[sink] = true;
    let mut queue = VecDeque::new();
    queue.push_back(sink);

    while let Some(u) = queue.pop_front() {
        if u == source {
            let mut arcs = Vec::new();
            let mut x = u;
            while x != sink {
                arcs.push(came_from_arc[x]);
                x = came_from_node[x];
            }
            return Some(arcs);
        }
        for &arc in graph.in_arcs_of(u) {
            let prev = graph.source[arc];
            if !visited[prev] {
                visited[prev] = true;
                came_from_arc[prev] = arc;
                came_from_node[prev] = u;
                queue.push_back(prev);
            }
        }
    }
    None
}

fn cheapest_entering_arc<F: FlowNum>(graph: &GraphState<F>, v: usize) -> Option<usize> {
    graph
        .in_arcs_of(v)
        .iter()
        .copied()
        .min_by(|&a, &b| graph.cost[a].partial_cmp(&graph.cost[b]).unwrap_or(std::cmp::Ordering::Equal))
}

fn cheapest_leaving_arc<F: FlowNum>(graph: &GraphState<F>, u: usize) -> Option<usize> {
    graph
        .out_arcs_of(u)
        .iter()
        .copied()
        .min_by(|&a, &b| graph.cost[a].partial_cmp(&graph.cost[b]).unwrap_or(std::cmp::Ordering::Equal))
}
