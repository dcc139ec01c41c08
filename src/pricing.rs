//! Pricing rules (§4.3, §9 "Polymorphic pricing rules"). `BlockSearch` is
//! the rule spec.md requires; `Dantzig` and `FirstEligible` are supplemented
//! alternatives behind the same trait so the driver can swap rules without
//! change.

use crate::graph::GraphState;
use crate::tree::TreeState;
use crate::types::{ArcState, FlowNum};

/// Signed reduced cost `r(e) = state(e) * (cost(e) + pi(source) - pi(target))`
/// (§4.3). Negative means the arc violates its optimality condition.
#[inline]
pub(crate) fn signed_reduced_cost<F: FlowNum>(graph: &GraphState<F>, tree: &TreeState<F>, e: usize) -> F {
    let raw = graph.cost[e] + tree.pi[graph.source[e]] - tree.pi[graph.target[e]];
    graph.state[e].sign::<F>() * raw
}

/// `a = max(|pi_i|, |pi_j|, |cost|)`, the scale term the ε gate uses (§4.3).
#[inline]
fn violation_scale<F: FlowNum>(graph: &GraphState<F>, tree: &TreeState<F>, e: usize) -> F {
    let a = tree.pi[graph.source[e]].abs();
    let b = tree.pi[graph.target[e]].abs();
    let c = graph.cost[e].abs();
    let m = if a > b { a } else { b };
    if m > c {
        m
    } else {
        c
    }
}

/// `{ init(arc_count), find_entering(graph_state) -> Option<arc_id> }` (§9).
pub trait PricingRule<F: FlowNum> {
    fn init(&mut self, arc_count: usize);
    fn find_entering(&mut self, graph: &GraphState<F>, tree: &TreeState<F>, eps: F) -> Option<usize>;
}

/// Scans user arcs in blocks of `B = max(ceil(sqrt(m)), 10)`, accepting the
/// best violator seen once a full block has passed the ε gate (§4.3).
pub struct BlockSearch {
    block_size: usize,
    next_arc: usize,
}

impl BlockSearch {
    pub fn new() -> Self {
        Self {
            block_size: 10,
            next_arc: 0,
        }
    }
}

impl Default for BlockSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FlowNum> PricingRule<F> for BlockSearch {
    fn init(&mut self, arc_count: usize) {
        let sqrt_m = (arc_count as f64).sqrt().ceil() as usize;
        self.block_size = sqrt_m.max(10);
        self.next_arc = 0;
    }

    fn find_entering(&mut self, graph: &GraphState<F>, tree: &TreeState<F>, eps: F) -> Option<usize> {
        let m = graph.m;
        if m == 0 {
            return None;
        }
        self.next_arc %= m;

        let mut scanned = 0usize;
        let mut since_block = 0usize;
        let mut best: Option<(usize, F)> = None;

        let mut accept = |best: &Option<(usize, F)>| -> Option<usize> {
            let (arc, r) = (*best)?;
            let scale = violation_scale(graph, tree, arc);
            if r.below_negative_eps(eps, scale) {
                Some(arc)
            } else {
                None
            }
        };

        while scanned < m {
            let e = self.next_arc;
            self.next_arc = (self.next_arc + 1) % m;
            scanned += 1;
            since_block += 1;

            if graph.state[e] != ArcState::Tree {
                let r = signed_reduced_cost(graph, tree, e);
                if best.map_or(true, |(_, br)| r < br) {
                    best = Some((e, r));
                }
            }

            if since_block >= self.block_size {
                since_block = 0;
                if let Some(arc) = accept(&best) {
                    self.next_arc = (arc + 1) % m;
                    return Some(arc);
                }
                best = None;
            }
        }

        if let Some(arc) = accept(&best) {
            self.next_arc = (arc + 1) % m;
            return Some(arc);
        }
        None
    }
}

/// Full scan, always returns the single most-violating arc (classic Dantzig
/// rule). Simpler than `BlockSearch` but touches every user arc every pivot.
pub struct Dantzig;

impl<F: FlowNum> PricingRule<F> for Dantzig {
    fn init(&mut self, _arc_count: usize) {}

    fn find_entering(&mut self, graph: &GraphState<F>, tree: &TreeState<F>, eps: F) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for e in 0..graph.m {
            if graph.state[e] == ArcState::Tree {
                continue;
            }
            let r = signed_reduced_cost(graph, tree, e);
            if best.map_or(true, |(_, br)| r < br) {
                best = Some((e, r));
            }
        }
        let (arc, r) = best?;
        let scale = violation_scale(graph, tree, arc);
        r.below_negative_eps(eps, scale).then_some(arc)
    }
}

/// Returns the first violator encountered while cycling from the cursor.
pub struct FirstEligible {
    next_arc: usize,
}

impl FirstEligible {
    pub fn new() -> Self {
        Self { next_arc: 0 }
    }
}

impl Default for FirstEligible {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FlowNum> PricingRule<F> for FirstEligible {
    fn init(&mut self, _arc_count: usize) {
        self.next_arc = 0;
    }

    fn find_entering(&mut self, graph: &GraphState<F>, tree: &TreeState<F>, eps: F) -> Option<usize> {
        let m = graph.m;
        if m == 0 {
            return None;
        }
        self.next_arc %= m;
        for scanned in 0..m {
            let e = (self.next_arc + scanned) % m;
            if graph.state[e] == ArcState::Tree {
                continue;
            }
            let r = signed_reduced_cost(graph, tree, e);
            let scale = violation_scale(graph, tree, e);
            if r.below_negative_eps(eps, scale) {
                self.next_arc = (e + 1) % m;
                return Some(e);
            }
        }
        None
    }
}
