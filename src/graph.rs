//! Graph state (§3, §4.1's input side): the flat parallel arrays encoding
//! nodes, arcs, supplies, costs and capacities, plus the CSR adjacency index
//! used by the initial-pivot heuristics (§4.2). Laid out as parallel flat
//! buffers per §5, in the same spirit as `sssp_core`'s own
//! `offsets`/`targets`/`weights` CSR arrays.

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::types::{ArcState, FlowNum};

/// One user-supplied arc (§6 "Inputs to `solve()`").
#[derive(Debug, Clone, Copy)]
pub struct ArcSpec<F> {
    pub source: usize,
    pub target: usize,
    pub cost: F,
    /// Use `SolverConfig::inf_capacity` for "unbounded".
    pub capacity: F,
}

impl<F> ArcSpec<F> {
    pub fn new(source: usize, target: usize, cost: F, capacity: F) -> Self {
        Self {
            source,
            target,
            cost,
            capacity,
        }
    }
}

/// The engine stores `m` user arcs followed by `n` artificial arcs to the
/// synthetic root (§3).
pub struct GraphState<F> {
    /// User node count.
    pub n: usize,
    /// User arc count.
    pub m: usize,
    /// Synthetic root node id, always `n`.
    pub root: usize,
    /// `m + n`.
    pub total_arcs: usize,

    pub supply: Vec<F>,

    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub cost: Vec<F>,
    pub capacity: Vec<F>,
    pub flow: Vec<F>,
    pub state: Vec<ArcState>,

    /// CSR adjacency over user arcs only, by source node: `out_offset[u]..out_offset[u+1]`
    /// indexes into `out_arcs` for arc ids leaving `u`.
    pub out_offset: Vec<usize>,
    pub out_arcs: Vec<usize>,
    /// Same, indexed by target node (arcs entering `u`).
    pub in_offset: Vec<usize>,
    pub in_arcs: Vec<usize>,
}

impl<F: FlowNum> GraphState<F> {
    pub fn new(n: usize, arcs: &[ArcSpec<F>], supply: &[F], config: &SolverConfig<F>) -> Result<Self, SolveError> {
        if n == 0 {
            return Err(SolveError::EmptyGraph);
        }
        if supply.len() != n {
            return Err(SolveError::SupplyLengthMismatch {
                got: supply.len(),
                expected: n,
            });
        }
        for (arc_id, a) in arcs.iter().enumerate() {
            if a.source >= n {
                return Err(SolveError::NodeOutOfRange {
                    arc: arc_id,
                    node: a.source,
                    node_count: n,
                });
            }
            if a.target >= n {
                return Err(SolveError::NodeOutOfRange {
                    arc: arc_id,
                    node: a.target,
                    node_count: n,
                });
            }
            if a.capacity < F::zero() {
                return Err(SolveError::NegativeCapacity {
                    arc: arc_id,
                    capacity: format!("{:?}", a.capacity),
                });
            }
        }

        let mut total = F::zero();
        for &s in supply {
            total += s;
        }
        if total.abs() > config.balance_tol {
            return Err(SolveError::Unbalanced {
                total: format!("{:?}", total),
                eps: format!("{:?}", config.balance_tol),
            });
        }
        // Re-normalize small floating drift so the basis initializer sees an
        // exactly-balanced supply vector (§9 Open Question; see DESIGN.md).
        let correction = total / F::from_usize(n);
        let supply: Vec<F> = supply.iter().map(|&s| s - correction).collect();

        let m = arcs.len();
        let root = n;
        let total_arcs = m + n;

        let mut source = vec![0usize; total_arcs];
        let mut target = vec![0usize; total_arcs];
        let mut cost = vec![F::zero(); total_arcs];
        let mut capacity = vec![F::zero(); total_arcs];
        let flow = vec![F::zero(); total_arcs];
        let state = vec![ArcState::Lower; total_arcs];

        let mut out_count = vec![0usize; n];
        let mut in_count = vec![0usize; n];
        for (arc_id, a) in arcs.iter().enumerate() {
            source[arc_id] = a.source;
            target[arc_id] = a.target;
            cost[arc_id] = a.cost;
            capacity[arc_id] = a.capacity;
            out_count[a.source] += 1;
            in_count[a.target] += 1;
        }

        let mut out_offset = vec![0usize; n + 1];
        let mut in_offset = vec![0usize; n + 1];
        for u in 0..n {
            out_offset[u + 1] = out_offset[u] + out_count[u];
            in_offset[u + 1] = in_offset[u] + in_count[u];
        }
        let mut out_arcs = vec![0usize; m];
        let mut in_arcs = vec![0usize; m];
        let mut out_cursor = out_offset.clone();
        let mut in_cursor = in_offset.clone();
        for (arc_id, a) in arcs.iter().enumerate() {
            out_arcs[out_cursor[a.source]] = arc_id;
            out_cursor[a.source] += 1;
            in_arcs[in_cursor[a.target]] = arc_id;
            in_cursor[a.target] += 1;
        }

        Ok(Self {
            n,
            m,
            root,
            total_arcs,
            supply,
            source,
            target,
            cost,
            capacity,
            flow,
            state,
            out_offset,
            out_arcs,
            in_offset,
            in_arcs,
        })
    }

    #[inline]
    pub fn out_arcs_of(&self, u: usize) -> &[usize] {
        &self.out_arcs[self.out_offset[u]..self.out_offset[u + 1]]
    }

    #[inline]
    pub fn in_arcs_of(&self, u: usize) -> &[usize] {
        &self.in_arcs[self.in_offset[u]..self.in_offset[u + 1]]
    }

    /// Arc id of node `u`'s artificial arc to the root (§4.1).
    #[inline]
    pub fn artificial_arc_of(&self, u: usize) -> usize {
        self.m + u
    }
}
