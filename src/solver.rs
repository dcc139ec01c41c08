//! Driver (§4.9): initial heuristic pivots, then the main pricing/pivot
//! loop, until a violator-free sweep reports optimal (or the configured
//! iteration cap / an unbounded cycle end the loop early).

use crate::config::{PricingRuleKind, SolverConfig};
use crate::error::SolveError;
use crate::graph::{ArcSpec, GraphState};
use crate::heuristics;
use crate::init;
use crate::join;
use crate::pivot;
use crate::potential;
use crate::pricing::{BlockSearch, Dantzig, FirstEligible, PricingRule};
use crate::restructure;
use crate::tree::TreeState;
use crate::types::{ArcState, FlowNum};
use num_traits::Zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
    MaxIterReached,
}

#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct PivotStats {
    pub iterations: u64,
    pub degenerate_pivots: u64,
    pub heuristic_pivots_applied: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Solution<F> {
    pub status: Status,
    /// Length `m`, one entry per user arc, in input order.
    pub flow: Vec<F>,
    /// Length `n`, one entry per user node.
    pub pi: Vec<F>,
    pub total_cost: F,
    pub stats: PivotStats,
}

/// Entry point over a prepared arc list and supply vector (§1, §6).
pub fn solve<F: FlowNum>(n: usize, arcs: &[ArcSpec<F>], supply: &[F], config: &SolverConfig<F>) -> Result<Solution<F>, SolveError> {
    log::debug!("solve: n={} m={} pricing_rule={:?}", n, arcs.len(), config.pricing_rule);

    let mut graph = GraphState::new(n, arcs, supply, config)?;
    let mut tree = TreeState::new(n + 1);
    init::build_initial_basis(&mut graph, &mut tree, config);

    let mut stats = PivotStats::default();
    stats.heuristic_pivots_applied = heuristics::run_initial_pivots(&mut graph, &mut tree, config);
    log::debug!("solve: heuristic pivots applied = {}", stats.heuristic_pivots_applied);

    let status = match config.pricing_rule {
        PricingRuleKind::BlockSearch => run_main_loop(&mut graph, &mut tree, config, &mut BlockSearch::new(), &mut stats),
        PricingRuleKind::Dantzig => run_main_loop(&mut graph, &mut tree, config, &mut Dantzig, &mut stats),
        PricingRuleKind::FirstEligible => run_main_loop(&mut graph, &mut tree, config, &mut FirstEligible::new(), &mut stats),
    };

    let status = match status {
        Some(terminal) => terminal,
        None => {
            if artificial_flow_is_zero(&graph) {
                Status::Optimal
            } else {
                Status::Infeasible
            }
        }
    };

    log::debug!("solve: terminated status={:?} iterations={} degenerate={}", status, stats.iterations, stats.degenerate_pivots);

    debug_assert!(status != Status::Optimal || duality_holds(&graph, &tree, config));

    let flow = graph.flow[0..graph.m].to_vec();
    let pi = tree.pi[0..graph.n].to_vec();
    let mut total_cost = F::zero();
    for e in 0..graph.m {
        total_cost += graph.flow[e] * graph.cost[e];
    }

    Ok(Solution {
        status,
        flow,
        pi,
        total_cost,
        stats,
    })
}

/// Returns `Some(status)` if the loop ended early (unbounded / max-iter);
/// `None` if it ended because pricing found no violator (candidate optimal,
/// pending the infeasibility check in `solve`).
fn run_main_loop<F: FlowNum, P: PricingRule<F>>(
    graph: &mut GraphState<F>,
    tree: &mut TreeState<F>,
    config: &SolverConfig<F>,
    pricing: &mut P,
    stats: &mut PivotStats,
) -> Option<Status> {
    pricing.init(graph.m);
    loop {
        if config.max_iter != 0 && stats.iterations >= config.max_iter {
            return Some(Status::MaxIterReached);
        }
        let entering = pricing.find_entering(graph, tree, config.eps)?;
        log::trace!("pivot {}: entering arc {}", stats.iterations, entering);
        match apply_entering_arc(graph, tree, entering, config) {
            PivotOutcome::Unbounded => {
                log::debug!("pivot {}: entering arc {} is unbounded (delta >= inf_capacity)", stats.iterations, entering);
                return Some(Status::Unbounded);
            }
            PivotOutcome::Applied { delta } => {
                stats.iterations += 1;
                if delta.is_zero() {
                    stats.degenerate_pivots += 1;
                }
            }
        }
    }
}

pub(crate) enum PivotOutcome<F> {
    Applied { delta: F },
    Unbounded,
}

/// Runs one full pivot (join, leaving, augment, restructure, potential
/// update) for `entering_arc` — the mechanics shared by the main loop and
/// the initial heuristic pivots (§4.2, §4.9).
pub(crate) fn apply_entering_arc<F: FlowNum>(
    graph: &mut GraphState<F>,
    tree: &mut TreeState<F>,
    entering_arc: usize,
    config: &SolverConfig<F>,
) -> PivotOutcome<F> {
    let k = graph.source[entering_arc];
    let l = graph.target[entering_arc];
    let join = join::find_join(tree, k, l);
    let leaving = pivot::find_leaving_arc(graph, tree, entering_arc, join, config.inf_capacity);

    if leaving.delta >= config.inf_capacity {
        return PivotOutcome::Unbounded;
    }

    log::trace!("pivot: leaving arc {} delta {:?}", leaving.leaving_arc, leaving.delta);

    pivot::augment_flow(graph, tree, entering_arc, join, leaving.delta);

    // A bounded entering arc can itself be the binding constraint
    // (`u_out == NONE`, §4.5): the cycle saturates the entering arc before
    // reaching any tree arc, so it stays non-basic (flips LOWER <-> UPPER)
    // and the basis tree is unchanged — no restructure, no potential shift.
    if leaving.leaving_arc == entering_arc {
        graph.state[entering_arc] = if graph.flow[entering_arc].is_zero() {
            ArcState::Lower
        } else {
            ArcState::Upper
        };
        return PivotOutcome::Applied { delta: leaving.delta };
    }

    graph.state[entering_arc] = ArcState::Tree;
    graph.state[leaving.leaving_arc] = if graph.flow[leaving.leaving_arc].is_zero() {
        ArcState::Lower
    } else {
        ArcState::Upper
    };

    restructure::restructure(graph, tree, leaving.u_in, leaving.v_in, leaving.u_out, entering_arc, graph.root, graph.n + 1);
    potential::update_potentials(graph, tree, leaving.u_in, leaving.v_in, entering_arc);

    PivotOutcome::Applied { delta: leaving.delta }
}

fn artificial_flow_is_zero<F: FlowNum>(graph: &GraphState<F>) -> bool {
    (graph.m..graph.total_arcs).all(|e| graph.flow[e].is_zero())
}

/// Duality law (§8): `Σ supply[u]·pi[u] = total_cost` at OPTIMAL.
fn duality_holds<F: FlowNum>(graph: &GraphState<F>, tree: &TreeState<F>, config: &SolverConfig<F>) -> bool {
    let mut lhs = F::zero();
    for u in 0..graph.n {
        lhs += graph.supply[u] * tree.pi[u];
    }
    let mut rhs = F::zero();
    for e in 0..graph.m {
        rhs += graph.flow[e] * graph.cost[e];
    }
    (lhs - rhs).abs() <= config.eps * (rhs.abs() + F::one())
}
